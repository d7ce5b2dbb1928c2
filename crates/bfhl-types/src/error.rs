//! Dispatch error types shared by every layer that reports a rejected request.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client-facing error messages.
///
/// These strings are part of the wire contract: callers match on them.
pub mod messages {
    /// The request object did not contain exactly one key.
    pub const EXACTLY_ONE_KEY: &str = "Exactly one key is required";
    /// The single key is not a known operation.
    pub const INVALID_KEY: &str = "Invalid key";
    /// `fibonacci` value is not a non-negative integer.
    pub const FIBONACCI_INPUT: &str = "Fibonacci input must be a non-negative integer";
    /// `prime` value is not an array.
    pub const PRIME_INPUT: &str = "Prime input must be an array";
    /// `lcm` value is not an array of at least two integers.
    pub const LCM_INPUT: &str = "LCM requires an array of at least two integers";
    /// `hcf` value is not an array of at least two integers.
    pub const HCF_INPUT: &str = "HCF requires an array of at least two integers";
    /// `AI` value is not a non-empty string.
    pub const AI_INPUT: &str = "AI input must be a non-empty string";
    /// The folded LCM does not fit in a `u64`.
    pub const LCM_OVERFLOW: &str = "LCM result overflows a 64-bit integer";
    /// The computation was aborted before producing a result.
    pub const INTERRUPTED: &str = "Operation could not be completed";
}

/// Classification of dispatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Wrong key count or unrecognized key.
    Shape,
    /// The value failed the operation's type, range or length constraint.
    Validation,
    /// The server failed to finish a valid request.
    Internal,
}

/// A rejected request. Always reported to the caller as a failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct DispatchError {
    /// The kind of error.
    pub kind: ErrorKind,
    /// Human-readable message, sent verbatim in the `error` field.
    pub message: String,
}

impl DispatchError {
    /// Creates a new `DispatchError`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a shape error (key count or unknown key).
    pub fn shape(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Shape, message)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_constructor_sets_kind() {
        let err = DispatchError::internal(messages::INTERRUPTED);
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.to_string(), messages::INTERRUPTED);
    }

    #[test]
    fn display_is_the_bare_message() {
        let err = DispatchError::shape(messages::INVALID_KEY);
        assert_eq!(err.to_string(), "Invalid key");
    }

    #[test]
    fn shape_constructor() {
        let err = DispatchError::shape(messages::EXACTLY_ONE_KEY);
        assert_eq!(err.kind, ErrorKind::Shape);
    }

    #[test]
    fn validation_constructor() {
        let err = DispatchError::validation(messages::PRIME_INPUT);
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Prime input must be an array");
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::Validation).expect("serialize");
        assert_eq!(json, "\"validation\"");
    }
}
