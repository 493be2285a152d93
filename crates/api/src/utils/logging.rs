use std::time::Duration;

use orion_domain::OrionError;
use tracing::{info, warn};

/// Log the outcome of an application-level operation with structured fields.
///
/// `operation` is a stable identifier such as `"context::start"`; callers must
/// not pass user data or credentials through it.
#[inline]
pub fn log_operation(operation: &str, elapsed: Duration, outcome: Result<(), &OrionError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match outcome {
        Ok(()) => info!(operation, duration_ms, "operation_success"),
        Err(err) => {
            let kind = error_label(err);
            warn!(operation, duration_ms, kind, error = %err, "operation_failure");
        }
    }
}

/// Convert an `OrionError` into a stable label suitable for logging.
#[inline]
pub const fn error_label(error: &OrionError) -> &'static str {
    match error {
        OrionError::Config(_) => "config",
        OrionError::Network(_) => "network",
        OrionError::Auth(_) => "auth",
        OrionError::Storage(_) => "storage",
        OrionError::NotFound(_) => "not_found",
        OrionError::InvalidInput(_) => "invalid_input",
        OrionError::Internal(_) => "internal",
        OrionError::Api { .. } => "api",
    }
}
