//! Error types for the HTTP transport layer.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that can stop the HTTP server.
#[derive(Debug, Error)]
pub enum HttpTransportError {
    /// Failed to bind the listening socket.
    #[error("failed to bind on {addr}: {source}")]
    Bind {
        /// The requested address.
        addr: SocketAddr,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The accept loop failed after binding.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn bind_error_displays_address() {
        let err = HttpTransportError::Bind {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            source: Error::new(ErrorKind::AddrInUse, "in use"),
        };
        let msg = err.to_string();
        assert!(msg.contains("0.0.0.0:3000"));
        assert!(msg.contains("in use"));
    }

    #[test]
    fn serve_error_keeps_source() {
        let err = HttpTransportError::Serve(Error::new(ErrorKind::ConnectionReset, "reset"));
        assert!(err.to_string().contains("reset"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
