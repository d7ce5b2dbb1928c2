//! HTTP server that binds an axum Router to a TCP socket.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use bfhl_dispatch::Dispatcher;

use crate::error::HttpTransportError;
use crate::router::{build_router, AppState};

/// Axum-based HTTP server for the bfhl endpoints.
pub struct HttpServer {
    pub(crate) addr: SocketAddr,
    pub(crate) state: AppState,
}

impl HttpServer {
    /// Creates a new HTTP server.
    ///
    /// # Arguments
    ///
    /// * `dispatcher`: shared request dispatcher
    /// * `addr`: address to listen on
    /// * `body_limit`: largest accepted request body, in bytes
    pub fn new(dispatcher: Arc<Dispatcher>, addr: SocketAddr, body_limit: usize) -> Self {
        Self {
            addr,
            state: AppState {
                dispatcher,
                body_limit,
            },
        }
    }

    /// Returns the configured listen address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Starts the server and blocks until it exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run(self) -> Result<(), HttpTransportError> {
        self.run_until(std::future::pending()).await
    }

    /// Starts the server and drains in-flight requests once `shutdown`
    /// resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), HttpTransportError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|e| HttpTransportError::Bind {
                addr: self.addr,
                source: e,
            })?;

        let local = listener.local_addr().unwrap_or(self.addr);
        tracing::info!(
            addr = %local,
            oracle = self.state.dispatcher.oracle_name(),
            "bfhl HTTP server ready"
        );

        let router = build_router(self.state);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(HttpTransportError::Serve)?;

        tracing::info!("bfhl HTTP server stopped");
        Ok(())
    }
}
