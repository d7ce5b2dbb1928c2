//! bfhl CLI - single-endpoint numeric/AI dispatcher.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod input;
mod output;
pub(crate) mod shared;

/// bfhl - JSON dispatcher for sequence, prime, lcm/hcf and AI operations.
#[derive(Debug, Parser)]
#[command(name = "bfhl", version, about)]
struct Cli {
    /// Configuration file path (TOML).
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv). Overrides `logging.level`.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP server.
    Serve(commands::serve::ServeArgs),
    /// Run one request body through the dispatcher and print the envelope.
    Eval(commands::eval::EvalArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = bfhl_config::load_config(cli.config.as_deref())?;

    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    };

    tracing::debug!(config_file = ?cli.config, ?config, "bfhl starting");

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Eval(args) => commands::eval::execute(args, &config).await,
    }
}
