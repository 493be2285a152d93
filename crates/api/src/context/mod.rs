//! Application context - dependency injection container

use std::sync::{Arc, Weak};
use std::time::Instant;

use once_cell::sync::OnceCell;
use orion_core::{AuthSession, LanguagePreferences, Navigator, SessionState};
use orion_domain::{Config, Language, OrionError, Result};
use orion_infra::{build_token_store, config, observability, ApiClient, OrionApi, SessionStores};

use crate::utils::logging::log_operation;

/// Navigator handed to the API client.
///
/// When the client gives up on a session it clears the store and redirects;
/// this relay first drops the signed-in user from the session controller so
/// observers never see a user without credentials. The session is held weakly
/// because it owns the client through its gateway.
struct SessionExpiryRelay {
    session: OnceCell<Weak<AuthSession>>,
    inner: Arc<dyn Navigator>,
}

impl SessionExpiryRelay {
    fn new(inner: Arc<dyn Navigator>) -> Self {
        Self { session: OnceCell::new(), inner }
    }

    fn attach(&self, session: &Arc<AuthSession>) {
        if self.session.set(Arc::downgrade(session)).is_err() {
            tracing::warn!("session expiry relay attached twice");
        }
    }
}

impl Navigator for SessionExpiryRelay {
    fn redirect_to_landing(&self) {
        if let Some(session) = self.session.get().and_then(Weak::upgrade) {
            session.expire();
        }
        self.inner.redirect_to_landing();
    }
}

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub stores: SessionStores,
    pub client: Arc<ApiClient>,
    pub api: OrionApi,
    pub session: Arc<AuthSession>,
    pub preferences: LanguagePreferences,
}

impl AppContext {
    /// Wire every component from `config`.
    ///
    /// `navigator` receives the redirect to the landing route whenever a
    /// session ends because its refresh token was rejected.
    ///
    /// # Errors
    ///
    /// Returns `OrionError::Config` for an unusable base URL or a keychain
    /// service name the platform rejects.
    pub fn new(config: Config, navigator: Arc<dyn Navigator>) -> Result<Self> {
        let stores = build_token_store(&config.storage)?;
        let relay = Arc::new(SessionExpiryRelay::new(navigator));

        let client = ApiClient::new((&config.api).into(), stores.tokens.clone(), relay.clone())
            .map_err(OrionError::from)?;
        let client = Arc::new(client);
        let api = OrionApi::new(client.clone());

        let session = Arc::new(AuthSession::new(api.auth.clone(), stores.tokens.clone()));
        relay.attach(&session);

        let preferences = LanguagePreferences::new(stores.preferences.clone());

        tracing::info!(
            base_url = %config.api.base_url,
            backend = config.storage.backend.as_str(),
            "application context ready"
        );

        Ok(Self { config, stores, client, api, session, preferences })
    }

    /// Load configuration from the environment, install logging and wire
    /// the context.
    ///
    /// # Errors
    ///
    /// Propagates configuration, logging and storage failures.
    pub fn from_env(navigator: Arc<dyn Navigator>) -> Result<Self> {
        let config = config::load()?;
        observability::init(&config.logging)?;
        Self::new(config, navigator)
    }

    /// Restore any persisted session. Call once when the front end starts.
    pub async fn start(&self) -> SessionState {
        let started = Instant::now();
        self.session.hydrate().await;
        log_operation("context::start", started.elapsed(), Ok(()));
        self.session.snapshot()
    }

    /// Display language for a system reporting `locale`.
    pub async fn language(&self, locale: Option<&str>) -> Language {
        self.preferences.current(locale).await
    }

    /// Save the user's language choice.
    ///
    /// # Errors
    ///
    /// Returns `OrionError::Storage` if the choice cannot be written.
    pub async fn change_language(&self, language: Language) -> Result<()> {
        let started = Instant::now();
        let outcome = self.preferences.change(language).await;
        log_operation("context::change_language", started.elapsed(), outcome.as_ref().copied());
        outcome
    }
}
