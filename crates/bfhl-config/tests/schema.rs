//! Integration tests for bfhl-config schema types.

use bfhl_config::schema::{BfhlConfig, LoggingConfig, OracleConfig, ServerConfig};
use std::time::Duration;

#[test]
fn bfhl_config_default_values() {
    let config = BfhlConfig::default();
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.body_limit_bytes, 10_240);
    assert_eq!(config.server.host.to_string(), "0.0.0.0");
    assert_eq!(config.identity.official_email, "");
    assert!(config.oracle.api_key.is_none());
    assert_eq!(config.oracle.model, "gemini-2.5-flash");
    assert_eq!(config.oracle.timeout_secs, 10);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn socket_addr_combines_host_and_port() {
    let server = ServerConfig {
        port: 8080,
        ..ServerConfig::default()
    };
    assert_eq!(server.socket_addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn oracle_timeout_returns_duration() {
    let oracle = OracleConfig {
        timeout_secs: 3,
        ..OracleConfig::default()
    };
    assert_eq!(oracle.timeout(), Duration::from_secs(3));
}

#[test]
fn blank_api_key_counts_as_missing() {
    let oracle = OracleConfig {
        api_key: Some("   ".into()),
        ..OracleConfig::default()
    };
    assert!(oracle.api_key().is_none());
}

#[test]
fn api_key_is_redacted_in_debug() {
    let oracle = OracleConfig {
        api_key: Some("AIza-secret".into()),
        ..OracleConfig::default()
    };
    let dbg = format!("{oracle:?}");
    assert!(!dbg.contains("AIza-secret"));
    assert!(dbg.contains("<redacted>"));
}

#[test]
fn api_key_is_never_serialized() {
    let mut config = BfhlConfig::default();
    config.oracle.api_key = Some("AIza-secret".into());
    let json = serde_json::to_string(&config).expect("serialize");
    assert!(!json.contains("AIza-secret"));
}

#[test]
fn logging_default_level() {
    assert_eq!(LoggingConfig::default().level, "info");
}

#[test]
fn deny_unknown_fields_rejects_extra_key() {
    let json = r#"{"server":{},"identity":{},"oracle":{},"logging":{},"unknown_key":"bad"}"#;
    let result: Result<BfhlConfig, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn partial_config_uses_defaults_for_missing() {
    let json = r#"{"server":{"port":8081}}"#;
    let config: BfhlConfig = serde_json::from_str(json).expect("parse");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.body_limit_bytes, 10_240);
    assert_eq!(config.oracle.timeout_secs, 10);
}
