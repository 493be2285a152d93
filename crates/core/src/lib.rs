//! # ORION Core
//!
//! Session logic with no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for credential storage, navigation and the
//!   authentication API
//! - The [`AuthSession`] controller the view layer binds to
//! - Language preference resolution
//!
//! ## Architecture Principles
//! - Only depends on `orion-domain`
//! - No HTTP, filesystem or keychain code
//! - All external dependencies via traits

pub mod preferences;
pub mod session;

pub use preferences::LanguagePreferences;
pub use session::ports::{AuthGateway, Navigator, NoopNavigator, PreferenceStore, TokenStore};
pub use session::{AuthSession, SessionError, SessionState};
