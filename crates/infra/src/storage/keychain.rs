//! OS keychain credential storage

use std::sync::Arc;

use async_trait::async_trait;
use keyring::{Entry, Error as KeyringError};
use orion_core::{PreferenceStore, TokenStore};
use orion_domain::constants::{ACCESS_TOKEN_KEY, LANGUAGE_KEY, REFRESH_TOKEN_KEY};
use orion_domain::{CredentialPair, Language, OrionError, Result};
use tracing::{debug, warn};

use crate::errors::InfraError;

fn keychain_error(err: KeyringError) -> OrionError {
    InfraError::from(err).into()
}

/// Stores each value as its own keychain item under one service name.
///
/// Entries are opened once and kept, so every call addresses the same
/// platform credential. Platform keychain calls block (some show an unlock
/// prompt), so each one runs on tokio's blocking pool.
pub struct KeychainTokenStore {
    service: String,
    access: Arc<Entry>,
    refresh: Arc<Entry>,
    language: Arc<Entry>,
}

impl KeychainTokenStore {
    /// Open the keychain entries for `service`.
    ///
    /// # Errors
    ///
    /// Returns `OrionError::Config` if the platform keychain rejects the
    /// service or account names.
    pub fn new(service: impl Into<String>) -> Result<Self> {
        let service = service.into();
        let open = |key: &str| Entry::new(&service, key).map(Arc::new).map_err(keychain_error);

        Ok(Self {
            access: open(ACCESS_TOKEN_KEY)?,
            refresh: open(REFRESH_TOKEN_KEY)?,
            language: open(LANGUAGE_KEY)?,
            service,
        })
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    async fn blocking<T, F>(entry: &Arc<Entry>, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Entry) -> Result<T> + Send + 'static,
    {
        let entry = Arc::clone(entry);
        tokio::task::spawn_blocking(move || op(&entry))
            .await
            .map_err(|e| OrionError::Storage(format!("keychain task did not finish: {e}")))?
    }

    async fn get(entry: &Arc<Entry>) -> Result<Option<String>> {
        Self::blocking(entry, |entry| match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(KeyringError::NoEntry) => Ok(None),
            Err(err) => Err(keychain_error(err)),
        })
        .await
    }

    async fn set(entry: &Arc<Entry>, value: &str) -> Result<()> {
        let value = value.to_owned();
        Self::blocking(entry, move |entry| entry.set_password(&value).map_err(keychain_error))
            .await
    }

    async fn remove(entry: &Arc<Entry>) -> Result<()> {
        Self::blocking(entry, |entry| match entry.delete_credential() {
            Ok(()) | Err(KeyringError::NoEntry) => Ok(()),
            Err(err) => Err(keychain_error(err)),
        })
        .await
    }
}

#[async_trait]
impl TokenStore for KeychainTokenStore {
    async fn access_token(&self) -> Result<Option<String>> {
        Self::get(&self.access).await
    }

    async fn refresh_token(&self) -> Result<Option<String>> {
        Self::get(&self.refresh).await
    }

    async fn store_credentials(&self, credentials: &CredentialPair) -> Result<()> {
        Self::set(&self.access, &credentials.access_token).await?;
        Self::set(&self.refresh, &credentials.refresh_token).await?;
        debug!(service = %self.service, "credentials stored in keychain");
        Ok(())
    }

    async fn store_access_token(&self, token: &str) -> Result<()> {
        Self::set(&self.access, token).await
    }

    async fn store_refresh_token(&self, token: &str) -> Result<()> {
        Self::set(&self.refresh, token).await
    }

    async fn clear(&self) -> Result<()> {
        // Both deletes run even if the first fails, so a refresh token is
        // never left behind on its own.
        let access = Self::remove(&self.access).await;
        let refresh = Self::remove(&self.refresh).await;

        match access.and(refresh) {
            Ok(()) => {
                debug!(service = %self.service, "credentials removed from keychain");
                Ok(())
            }
            Err(err) => {
                warn!(service = %self.service, error = %err, "keychain clear incomplete");
                Err(err)
            }
        }
    }
}

#[async_trait]
impl PreferenceStore for KeychainTokenStore {
    async fn language(&self) -> Result<Option<String>> {
        Self::get(&self.language).await
    }

    async fn store_language(&self, language: Language) -> Result<()> {
        Self::set(&self.language, language.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use keyring::mock::MockCredential;

    use super::*;

    fn mock_store() -> KeychainTokenStore {
        keyring::set_default_credential_builder(keyring::mock::default_credential_builder());
        KeychainTokenStore::new("io.runagent.orion.test").unwrap()
    }

    #[tokio::test]
    async fn empty_keychain_has_no_tokens() {
        let store = mock_store();
        assert_eq!(store.access_token().await.unwrap(), None);
        assert_eq!(store.refresh_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn stores_and_clears_credentials() {
        let store = mock_store();
        store.store_credentials(&CredentialPair::new("access-1", "refresh-1")).await.unwrap();
        store.store_language(Language::En).await.unwrap();

        assert_eq!(store.access_token().await.unwrap().as_deref(), Some("access-1"));
        assert_eq!(store.refresh_token().await.unwrap().as_deref(), Some("refresh-1"));

        store.clear().await.unwrap();
        assert_eq!(store.access_token().await.unwrap(), None);
        assert_eq!(store.language().await.unwrap().as_deref(), Some("en"));

        // Clearing twice is fine
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn clear_removes_refresh_token_when_access_delete_fails() {
        let store = mock_store();
        store.store_credentials(&CredentialPair::new("access-1", "refresh-1")).await.unwrap();

        let failure = std::io::Error::other("keychain busy");
        store
            .access
            .get_credential()
            .downcast_ref::<MockCredential>()
            .unwrap()
            .set_error(KeyringError::PlatformFailure(Box::new(failure)));

        let err = store.clear().await.unwrap_err();

        assert!(matches!(err, OrionError::Storage(_)), "got {err:?}");
        assert_eq!(store.refresh_token().await.unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn works_from_a_multi_threaded_runtime() {
        let store = Arc::new(mock_store());
        let writer = Arc::clone(&store);

        tokio::spawn(async move { writer.store_access_token("access-2").await })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(store.access_token().await.unwrap().as_deref(), Some("access-2"));
    }
}
