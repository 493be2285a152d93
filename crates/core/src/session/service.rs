//! Session controller

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use orion_domain::constants::{LOGIN_FAILED_MESSAGE, REGISTRATION_FAILED_MESSAGE};
use orion_domain::{LoginCredentials, LoginResponse, RegisterData, Result, User};
use parking_lot::RwLock;
use tracing::{debug, info, instrument, warn};

use super::errors::SessionError;
use super::ports::{AuthGateway, TokenStore};

/// Payload fields consulted, in order, for a rejected login.
const LOGIN_ERROR_FIELDS: &[&str] = &["non_field_errors", "username", "password"];

/// Payload fields consulted, in order, for a rejected registration.
const REGISTER_ERROR_FIELDS: &[&str] = &["non_field_errors", "email", "password", "username"];

/// Observable session state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True until start-up hydration has finished.
    pub is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, is_loading: true }
    }
}

/// Holds the signed-in user and keeps stored credentials consistent with it.
pub struct AuthSession {
    gateway: Arc<dyn AuthGateway>,
    store: Arc<dyn TokenStore>,
    state: RwLock<SessionState>,
    hydrated: AtomicBool,
}

impl AuthSession {
    pub fn new(gateway: Arc<dyn AuthGateway>, store: Arc<dyn TokenStore>) -> Self {
        Self {
            gateway,
            store,
            state: RwLock::new(SessionState::default()),
            hydrated: AtomicBool::new(false),
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().user.is_some()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    /// Restore the user for credentials persisted by an earlier run.
    ///
    /// Runs once; later calls return the current user without touching the
    /// network. A failed lookup discards the stored tokens and leaves the
    /// session signed out.
    #[instrument(skip(self))]
    pub async fn hydrate(&self) -> Option<User> {
        if self.hydrated.swap(true, Ordering::SeqCst) {
            return self.current_user();
        }

        match self.store.access_token().await {
            Ok(Some(_)) => match self.gateway.current_user().await {
                Ok(user) => {
                    info!(user_id = user.id, "session restored");
                    self.state.write().user = Some(user);
                }
                Err(err) => {
                    warn!(error = %err, "stored session rejected, discarding credentials");
                    if let Err(clear_err) = self.store.clear().await {
                        warn!(error = %clear_err, "failed to clear stored credentials");
                    }
                }
            },
            Ok(None) => debug!("no stored session"),
            Err(err) => warn!(error = %err, "failed to read stored credentials"),
        }

        let mut state = self.state.write();
        state.is_loading = false;
        state.user.clone()
    }

    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> std::result::Result<User, SessionError> {
        let outcome = self.gateway.login(credentials).await;
        self.establish(outcome, LOGIN_ERROR_FIELDS, LOGIN_FAILED_MESSAGE).await
    }

    /// Create an account and sign in with it.
    ///
    /// Mismatched password fields are rejected here without calling the API.
    #[instrument(skip(self, data), fields(username = %data.username))]
    pub async fn register(&self, data: &RegisterData) -> std::result::Result<User, SessionError> {
        if !data.passwords_match() {
            return Err(SessionError::PasswordMismatch);
        }

        let outcome = self.gateway.register(data).await;
        self.establish(outcome, REGISTER_ERROR_FIELDS, REGISTRATION_FAILED_MESSAGE).await
    }

    #[instrument(skip_all)]
    pub async fn login_with_google(
        &self,
        access_token: &str,
    ) -> std::result::Result<User, SessionError> {
        let outcome = self.gateway.login_with_google(access_token).await;
        self.establish(outcome, LOGIN_ERROR_FIELDS, LOGIN_FAILED_MESSAGE).await
    }

    #[instrument(skip_all)]
    pub async fn login_with_apple(
        &self,
        identity_token: &str,
    ) -> std::result::Result<User, SessionError> {
        let outcome = self.gateway.login_with_apple(identity_token).await;
        self.establish(outcome, LOGIN_ERROR_FIELDS, LOGIN_FAILED_MESSAGE).await
    }

    /// Sign out. The remote call is best effort; local state is always
    /// cleared.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        if let Err(err) = self.gateway.logout().await {
            warn!(error = %err, "remote logout failed");
        }

        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "failed to clear stored credentials");
        }

        self.state.write().user = None;
        info!("signed out");
    }

    /// Forget the user after the HTTP client gave up renewing the session.
    /// Credentials are already gone at that point.
    pub fn expire(&self) {
        if self.state.write().user.take().is_some() {
            info!("session expired");
        }
    }

    async fn establish(
        &self,
        outcome: Result<LoginResponse>,
        error_fields: &[&str],
        fallback: &str,
    ) -> std::result::Result<User, SessionError> {
        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "authentication rejected");
                return Err(SessionError::rejected(&err, error_fields, fallback));
            }
        };

        self.store
            .store_credentials(&response.credentials())
            .await
            .map_err(SessionError::Storage)?;

        let user = response.user;
        info!(user_id = user.id, "signed in");
        self.state.write().user = Some(user.clone());
        Ok(user)
    }
}
