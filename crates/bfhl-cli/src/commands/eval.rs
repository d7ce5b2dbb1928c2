//! `bfhl eval` command.
//!
//! Runs a single request body through the dispatcher, exactly as
//! `POST /bfhl` would, and prints the response envelope.

use clap::Args;

use bfhl_config::BfhlConfig;

use crate::{input, output, shared};

/// Evaluate one request body locally.
#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Request body as inline JSON, e.g. '{"fibonacci":5}'.
    pub body: Option<String>,
    /// Read the body from a file (use "-" for stdin).
    #[arg(short = 'f', long)]
    pub input_file: Option<String>,
}

/// Executes the eval command.
pub async fn execute(args: &EvalArgs, config: &BfhlConfig) -> anyhow::Result<()> {
    let body = input::resolve_body(args.body.as_deref(), args.input_file.as_deref())?;
    let dispatcher = shared::build_dispatcher(config)?;

    let envelope = dispatcher.dispatch(&body).await;
    println!("{}", output::render_envelope(&envelope)?);

    if !envelope.is_success {
        anyhow::bail!(
            "request rejected: {}",
            envelope.error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}
