use orion_domain::OrionError;
use serde_json::Value;
use thiserror::Error;

/// Failure surfaced to the view layer by login-style operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// The API refused the request. Carries a message fit for display.
    #[error("{0}")]
    Rejected(String),

    /// Registration form with differing password fields; nothing was sent.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// The API accepted the login but the credentials could not be saved.
    #[error("Failed to persist session: {0}")]
    Storage(OrionError),
}

impl SessionError {
    /// Message for a rejected call, looked up in the error payload in
    /// `fields` order.
    pub(crate) fn rejected(error: &OrionError, fields: &[&str], fallback: &str) -> Self {
        let message = error
            .body()
            .and_then(|body| first_error_message(body, fields))
            .unwrap_or_else(|| fallback.to_string());
        Self::Rejected(message)
    }
}

/// First message found under any of `fields` in a validation error payload.
///
/// Field values are either a list of messages (`{"email": ["taken"]}`) or a
/// single string (`{"detail": "..."}`).
pub fn first_error_message(body: &Value, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| match body.get(*field)? {
        Value::String(message) => Some(message.clone()),
        Value::Array(messages) => messages.iter().find_map(Value::as_str).map(str::to_string),
        _ => None,
    })
}
