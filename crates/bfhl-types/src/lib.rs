//! # bfhl-types
//!
//! Domain types for the bfhl dispatcher.
//! This crate contains pure data types and request validation with no I/O
//! (serde for the wire format only).

pub mod envelope;
pub mod error;
pub mod operation;

// Re-exports for convenience.
pub use envelope::ResponseEnvelope;
pub use error::{messages, DispatchError, ErrorKind};
pub use operation::{
    as_integer, Operation, OperationKind, OperationOutput, MAX_FIBONACCI_TERMS,
};
