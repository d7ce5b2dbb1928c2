//! HTTP transport adapter for the bfhl dispatcher.
//! Exposes `POST /bfhl` and `GET /health` with permissive CORS and a
//! request body size limit.

mod error;
pub mod router;
pub mod server;

pub use error::HttpTransportError;
pub use router::{build_router, AppState};
pub use server::HttpServer;
