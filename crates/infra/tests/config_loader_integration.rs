//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use orion_domain::StorageBackend;
use orion_infra::config;
use tempfile::Builder;

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
[api]
base_url = "http://127.0.0.1:8000"
timeout_seconds = 15

[storage]
backend = "file"
path = "/tmp/orion-integration/session.json"

[logging]
level = "orion_infra=debug"
json = true
"#;

    let mut temp_file =
        Builder::new().suffix(".toml").tempfile().expect("Failed to create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("Failed to write to temp file");

    let config = config::load_from_file(Some(temp_file.path().to_path_buf()))
        .expect("Failed to load config from TOML file");

    assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.api.timeout().as_secs(), 15);
    assert_eq!(config.storage.backend, StorageBackend::File);
    assert_eq!(
        config.storage.path,
        std::path::PathBuf::from("/tmp/orion-integration/session.json")
    );
    assert_eq!(config.storage.keychain_service, "io.runagent.orion");
    assert_eq!(config.logging.level, "orion_infra=debug");
    assert!(config.logging.json);
}

#[test]
fn test_load_config_from_empty_json_uses_defaults() {
    let mut temp_file =
        Builder::new().suffix(".json").tempfile().expect("Failed to create temp file");
    temp_file.write_all(b"{}").expect("Failed to write to temp file");

    let config = config::load_from_file(Some(temp_file.path().to_path_buf()))
        .expect("Failed to load config from JSON file");

    assert_eq!(config, orion_domain::Config::default());
}
