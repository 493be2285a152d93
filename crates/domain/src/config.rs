//! Configuration structures
//!
//! Every section deserializes with defaults so a partial TOML/JSON file (or no
//! file at all) still produces a usable configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_KEYCHAIN_SERVICE, DEFAULT_SESSION_FILE, DEFAULT_TIMEOUT_SECS,
};
use crate::errors::OrionError;

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Remote API connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// # Errors
    /// Returns `OrionError::Config` for a zero timeout, which would fail
    /// every request.
    pub fn validate(&self) -> Result<(), OrionError> {
        if self.timeout_seconds == 0 {
            return Err(OrionError::Config("API timeout must be at least one second".into()));
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_string(), timeout_seconds: DEFAULT_TIMEOUT_SECS }
    }
}

/// Where session credentials are persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process memory only; nothing survives a restart.
    Memory,
    /// JSON file on disk.
    #[default]
    File,
    /// Operating system keychain.
    Keychain,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::File => "file",
            Self::Keychain => "keychain",
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = OrionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            "keychain" | "keyring" => Ok(Self::Keychain),
            other => Err(OrionError::Config(format!("Unknown storage backend: {other}"))),
        }
    }
}

/// Credential storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: PathBuf,
    pub keychain_service: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: PathBuf::from(DEFAULT_SESSION_FILE),
            keychain_service: DEFAULT_KEYCHAIN_SERVICE.to_string(),
        }
    }
}

/// Logging output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production_host() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://orionai.runagent.io");
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"api": {"base_url": "http://localhost:8000"}}"#).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let api = ApiConfig { timeout_seconds: 0, ..ApiConfig::default() };
        assert!(matches!(api.validate(), Err(OrionError::Config(_))));
        assert!(ApiConfig::default().validate().is_ok());
    }

    #[test]
    fn parses_storage_backend_names() {
        assert_eq!("Memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert_eq!("keyring".parse::<StorageBackend>().unwrap(), StorageBackend::Keychain);
        assert!(matches!("sqlite".parse::<StorageBackend>(), Err(OrionError::Config(_))));
    }
}
