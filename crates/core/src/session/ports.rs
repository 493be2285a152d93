//! Port interfaces for session management
//!
//! These traits define the boundaries between the session controller and the
//! infrastructure that stores credentials, talks to the API and moves the
//! user between routes.

use async_trait::async_trait;
use orion_domain::{
    CredentialPair, Language, LoginCredentials, LoginResponse, RegisterData, Result, User,
};

/// Persistent home of the session credentials.
///
/// The HTTP client reads the access token before every request and the
/// refresh token when a request comes back unauthorized; the session
/// controller writes both at login and clears them at logout.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn access_token(&self) -> Result<Option<String>>;

    async fn refresh_token(&self) -> Result<Option<String>>;

    /// Persist a freshly issued pair, replacing whatever was stored.
    async fn store_credentials(&self, credentials: &CredentialPair) -> Result<()>;

    /// Replace only the access token (after a refresh).
    async fn store_access_token(&self, token: &str) -> Result<()>;

    /// Replace only the refresh token (servers that rotate it on refresh).
    async fn store_refresh_token(&self, token: &str) -> Result<()>;

    /// Remove both tokens. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<()>;
}

/// Storage for user preferences that outlive a session.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Raw saved value; it may name a language this build does not know.
    async fn language(&self) -> Result<Option<String>>;

    async fn store_language(&self, language: Language) -> Result<()>;
}

/// Routing hook the HTTP client calls once a session cannot be renewed.
pub trait Navigator: Send + Sync {
    /// Leave any protected screen for the unauthenticated landing route.
    fn redirect_to_landing(&self);
}

/// Navigator for headless use; expiry is only visible through errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect_to_landing(&self) {}
}

/// Authentication endpoints of the remote API.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse>;

    async fn register(&self, data: &RegisterData) -> Result<LoginResponse>;

    async fn login_with_google(&self, access_token: &str) -> Result<LoginResponse>;

    async fn login_with_apple(&self, identity_token: &str) -> Result<LoginResponse>;

    async fn current_user(&self) -> Result<User>;

    async fn logout(&self) -> Result<()>;
}
