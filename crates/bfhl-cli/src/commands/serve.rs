//! `bfhl serve` command.
//!
//! Starts the HTTP server exposing `POST /bfhl` and `GET /health` until
//! Ctrl-C is received.

use std::net::IpAddr;

use clap::Args;

use bfhl_config::BfhlConfig;
use bfhl_transport_http::HttpServer;

use crate::shared;

/// Start the HTTP server.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// TCP port (overrides `server.port`).
    #[arg(long)]
    pub port: Option<u16>,
    /// Interface to bind (overrides `server.host`).
    #[arg(long)]
    pub host: Option<IpAddr>,
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, mut config: BfhlConfig) -> anyhow::Result<()> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }

    let dispatcher = shared::build_dispatcher(&config)?;
    let server = HttpServer::new(
        dispatcher,
        config.server.socket_addr(),
        config.server.body_limit_bytes,
    );

    server
        .run_until(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("server error: {e}"))?;
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed, never resolves.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::warn!(error = %e, "cannot listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
