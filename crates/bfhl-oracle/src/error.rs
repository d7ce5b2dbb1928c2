//! Error types for the remote text-generation client.

use thiserror::Error;

/// Failures talking to the text-generation API.
///
/// Never returned from [`crate::TextOracle::ask`]; they select the
/// fallback answer and are logged.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Connection, TLS or timeout failure. Carries no request URL.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("upstream returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },
    /// The response body was not the expected JSON.
    #[error("invalid upstream response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for OracleError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_code_and_body() {
        let err = OracleError::Status {
            status: 403,
            body: "API key not valid".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains("API key not valid"));
    }

    #[test]
    fn decode_error_displays_message() {
        let err = OracleError::Decode("expected value at line 1".into());
        assert!(err.to_string().contains("expected value"));
    }
}
