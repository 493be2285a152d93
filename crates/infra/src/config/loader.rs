//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Variables from a `.env` file are added to the process environment
//!    (existing variables win)
//! 2. The first config file found by [`probe_config_paths`] is parsed, or
//!    the built-in defaults are used when there is none
//! 3. Environment overrides are applied on top
//!
//! ## Environment Variables
//! - `ORION_API_URL`: API base URL
//! - `ORION_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `ORION_STORAGE_BACKEND`: `memory`, `file` or `keychain`
//! - `ORION_STORAGE_PATH`: Session file path for the file backend
//! - `ORION_LOG_LEVEL`: Default log filter when `RUST_LOG` is unset
//! - `ORION_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! `orion.{toml,json}` then `config.{toml,json}`, looked up in the current
//! working directory, its two parents, and next to the executable.

use std::path::{Path, PathBuf};

use orion_domain::{Config, OrionError, Result, StorageBackend};

const CONFIG_FILE_NAMES: [&str; 4] = ["orion.toml", "orion.json", "config.toml", "config.json"];

/// Load configuration from `.env`, an optional config file and the
/// environment.
///
/// # Errors
/// Returns `OrionError::Config` if a config file exists but cannot be
/// parsed, or an override has an invalid value.
pub fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }

    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    tracing::info!(
        base_url = %config.api.base_url,
        storage = config.storage.backend.as_str(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Defaults plus environment overrides, ignoring config files.
///
/// # Errors
/// Returns `OrionError::Config` if an override has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Supports JSON and
/// TOML (detected by file extension); missing sections take defaults.
///
/// # Errors
/// Returns `OrionError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(OrionError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            OrionError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| OrionError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let config: Config = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| OrionError::Config(format!("Invalid TOML format: {e}")))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| OrionError::Config(format!("Invalid JSON format: {e}")))?,
        _ => return Err(OrionError::Config(format!("Unsupported config format: {extension}"))),
    };

    config.api.validate()?;
    Ok(config)
}

/// Probe the standard locations for a config file
///
/// Returns the first file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
        dirs.push(cwd.join("../.."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Apply `ORION_*` environment overrides to `config`.
///
/// # Errors
/// Returns `OrionError::Config` for unparsable numbers, a zero timeout,
/// unknown storage backends or malformed URLs.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(url) = env_var("ORION_API_URL") {
        url::Url::parse(&url)
            .map_err(|e| OrionError::Config(format!("Invalid ORION_API_URL '{url}': {e}")))?;
        config.api.base_url = url;
    }

    if let Some(secs) = env_var("ORION_API_TIMEOUT_SECS") {
        config.api.timeout_seconds = secs
            .parse::<u64>()
            .map_err(|e| OrionError::Config(format!("Invalid API timeout: {e}")))?;
    }

    if let Some(backend) = env_var("ORION_STORAGE_BACKEND") {
        config.storage.backend = backend.parse::<StorageBackend>()?;
    }

    if let Some(path) = env_var("ORION_STORAGE_PATH") {
        config.storage.path = PathBuf::from(path);
    }

    if let Some(level) = env_var("ORION_LOG_LEVEL") {
        config.logging.level = level;
    }

    config.logging.json = env_bool("ORION_LOG_JSON", config.logging.json);

    config.api.validate()
}

/// Non-empty environment variable
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
