//! Authenticated session management
//!
//! [`AuthSession`] owns the current user and drives login, registration,
//! logout and start-up hydration against the [`ports::AuthGateway`], keeping
//! the persisted credentials in the [`ports::TokenStore`] in step.

mod errors;
pub mod ports;
mod service;

pub use errors::{first_error_message, SessionError};
pub use service::{AuthSession, SessionState};
