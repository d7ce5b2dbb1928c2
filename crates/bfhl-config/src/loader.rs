//! Configuration loader (file + env merge).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::BfhlConfig;

/// Unprefixed variables honoured for drop-in deployment, and the config
/// key each one sets. They take precedence over `BFHL_` variables.
pub const CONVENTIONAL_ENV: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("OFFICIAL_EMAIL", "identity.official_email"),
    ("GEMINI_API_KEY", "oracle.api_key"),
];

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`BFHL_` prefix, `__` for nesting,
///    e.g. `BFHL_SERVER__PORT`)
/// 4. Conventional variables listed in [`CONVENTIONAL_ENV`]
///
/// # Errors
///
/// Returns `ConfigError::Load` if a layer is malformed or a value has the
/// wrong type.
pub fn load_config(config_path: Option<&str>) -> Result<BfhlConfig, ConfigError> {
    figment(config_path)
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}

/// Builds the layered figment without extracting it.
pub fn figment(config_path: Option<&str>) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(BfhlConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment
        .merge(Env::prefixed("BFHL_").split("__"))
        .merge(conventional_env())
}

fn conventional_env() -> Env {
    Env::raw().filter_map(|key| {
        CONVENTIONAL_ENV
            .iter()
            .find(|(var, _)| key.as_str().eq_ignore_ascii_case(var))
            .map(|(_, path)| (*path).into())
    })
}
