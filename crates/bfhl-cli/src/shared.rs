//! Shared helpers used across CLI commands.
//!
//! Centralises building the oracle and the dispatcher from configuration,
//! so `serve` and `eval` answer requests identically.

use std::sync::Arc;

use bfhl_config::schema::OracleConfig;
use bfhl_config::BfhlConfig;
use bfhl_dispatch::Dispatcher;
use bfhl_oracle::{GeminiOracle, HeuristicOracle, TextOracle};

use crate::output;

/// Selects the text oracle.
///
/// Uses Gemini when an API key is configured, the heuristic oracle otherwise.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be initialised.
pub fn build_oracle(config: &OracleConfig) -> anyhow::Result<Arc<dyn TextOracle>> {
    match config.api_key() {
        Some(key) => {
            let oracle = GeminiOracle::new(key, config.timeout())
                .map_err(|e| anyhow::anyhow!("oracle init error: {e}"))?
                .with_model(config.model.as_str())
                .with_base_url(config.base_url.as_str());
            tracing::info!(model = oracle.model(), "using Gemini oracle");
            Ok(Arc::new(oracle))
        }
        None => {
            tracing::warn!("no Gemini API key configured; AI answers come from heuristics");
            Ok(Arc::new(HeuristicOracle::new()))
        }
    }
}

/// Builds the shared dispatcher.
///
/// # Errors
///
/// Returns an error if the oracle cannot be built.
pub fn build_dispatcher(config: &BfhlConfig) -> anyhow::Result<Arc<Dispatcher>> {
    let email = config.identity.official_email.trim();
    if email.is_empty() {
        output::print_warning("official_email is not set; responses will carry an empty address");
    }
    let oracle = build_oracle(&config.oracle)?;
    Ok(Arc::new(Dispatcher::new(email, oracle)))
}
