//! API-specific error types
//!
//! Classifies failed API calls. The client never retries on its own apart
//! from the single token refresh; [`ApiError::is_retryable`] tells the view
//! layer whether offering a manual retry makes sense.

use std::time::Duration;

use orion_domain::OrionError;
use serde_json::Value;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403)
    Authentication,
    /// Rate limiting errors (429)
    RateLimit,
    /// Server errors (5xx)
    Server,
    /// Client errors (4xx except auth)
    Client,
    /// Network/connection errors and timeouts
    Network,
    /// Configuration, storage and decoding errors
    Config,
}

/// API operation errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Authentication failed: {message}")]
    Auth { status: u16, message: String, body: Option<Value> },

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {message}")]
    Server { status: u16, message: String },

    #[error("Client error: {message}")]
    Client { status: u16, message: String, body: Option<Value> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Credential storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth { .. } => ApiErrorCategory::Authentication,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server { .. } => ApiErrorCategory::Server,
            Self::Client { .. } => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) | Self::Decode(_) | Self::Storage(_) => ApiErrorCategory::Config,
        }
    }

    /// Whether repeating the same call later could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::RateLimit | ApiErrorCategory::Server | ApiErrorCategory::Network
        )
    }

    /// HTTP status for errors produced by a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. }
            | Self::Server { status, .. }
            | Self::Client { status, .. } => Some(*status),
            Self::RateLimit(_) => Some(429),
            _ => None,
        }
    }

    /// Parsed JSON error payload, when the server sent one.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Auth { body, .. } | Self::Client { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<ApiError> for OrionError {
    fn from(err: ApiError) -> Self {
        let message = err.to_string();
        match err {
            ApiError::Auth { status, body, .. } | ApiError::Client { status, body, .. } => {
                Self::Api { status, message, body }
            }
            ApiError::Server { status, .. } => Self::Api { status, message, body: None },
            ApiError::RateLimit(_) => Self::Api { status: 429, message, body: None },
            ApiError::Network(_) | ApiError::Timeout(_) => Self::Network(message),
            ApiError::Config(_) => Self::Config(message),
            ApiError::Decode(_) => Self::Internal(message),
            ApiError::Storage(_) => Self::Storage(message),
        }
    }
}

impl From<OrionError> for ApiError {
    fn from(err: OrionError) -> Self {
        match err {
            OrionError::Network(message) => Self::Network(message),
            OrionError::Config(message) => Self::Config(message),
            OrionError::Storage(message) => Self::Storage(message),
            OrionError::Api { status, message, body } => match status {
                401 | 403 => Self::Auth { status, message, body },
                429 => Self::RateLimit(message),
                500..=599 => Self::Server { status, message },
                _ => Self::Client { status, message, body },
            },
            OrionError::Auth(message) => Self::Auth { status: 401, message, body: None },
            OrionError::NotFound(message) | OrionError::InvalidInput(message) => {
                Self::Client { status: 400, message, body: None }
            }
            OrionError::Internal(message) => Self::Decode(message),
        }
    }
}
