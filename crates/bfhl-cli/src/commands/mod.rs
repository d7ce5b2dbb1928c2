//! CLI command definitions.

pub mod eval;
pub mod serve;
