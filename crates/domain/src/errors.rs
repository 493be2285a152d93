//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Main error type for ORION
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum OrionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),

    /// The API answered with a non-success status. `body` holds the parsed
    /// JSON payload when the server sent one.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String, body: Option<Value> },
}

impl OrionError {
    /// HTTP status of an API failure, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// JSON payload returned alongside an API failure.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

/// Result type alias for ORION operations
pub type Result<T> = std::result::Result<T, OrionError>;
