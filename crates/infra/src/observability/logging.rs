//! Tracing subscriber setup

use orion_domain::{LoggingConfig, OrionError, Result};
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Returns `Ok(false)` when
/// a global subscriber was already installed, so repeated calls (tests,
/// embedding hosts) are harmless.
///
/// # Errors
/// Returns `OrionError::Config` if neither `RUST_LOG` nor the configured
/// level is a valid filter directive.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let filter = build_filter(config)?;

    let installed = if config.json {
        fmt().with_env_filter(filter).json().with_current_span(true).try_init().is_ok()
    } else {
        fmt().with_env_filter(filter).with_target(true).try_init().is_ok()
    };

    if installed {
        tracing::debug!(level = %config.level, json = config.json, "logging initialized");
    }
    Ok(installed)
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            OrionError::Config(format!("Invalid log level '{}': {e}", config.level))
        }),
    }
}
