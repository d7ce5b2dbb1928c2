//! # bfhl-oracle
//!
//! Port definition (`TextOracle`) for answering free-text questions with a
//! single word, plus its two adapters:
//!
//! - `GeminiOracle` calls the Gemini `generateContent` API and degrades to
//!   the heuristic answer on any upstream failure.
//! - `HeuristicOracle` answers locally from substring cues.

pub mod error;
pub mod gemini;
pub mod heuristic;
pub mod oracle;

pub use error::OracleError;
pub use gemini::GeminiOracle;
pub use heuristic::HeuristicOracle;
pub use oracle::{first_word, TextOracle, NO_RESPONSE, UNAVAILABLE, UNKNOWN};
