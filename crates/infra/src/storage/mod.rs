//! Credential and preference storage adapters
//!
//! Every adapter implements both [`TokenStore`] and [`PreferenceStore`].
//! Clearing credentials never touches the saved language.

mod file;
mod keychain;
mod memory;

use std::sync::Arc;

use orion_core::{PreferenceStore, TokenStore};
use orion_domain::{Result, StorageBackend, StorageConfig};
use tracing::info;

pub use file::FileTokenStore;
pub use keychain::KeychainTokenStore;
pub use memory::MemoryTokenStore;

/// One backing store seen through both ports.
#[derive(Clone)]
pub struct SessionStores {
    pub tokens: Arc<dyn TokenStore>,
    pub preferences: Arc<dyn PreferenceStore>,
}

impl SessionStores {
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: TokenStore + PreferenceStore + 'static,
    {
        Self { tokens: store.clone(), preferences: store }
    }
}

/// Build the store selected by `config.backend`.
///
/// # Errors
///
/// Returns `OrionError::Config` if the keychain rejects the configured
/// service name.
pub fn build_token_store(config: &StorageConfig) -> Result<SessionStores> {
    let stores = match config.backend {
        StorageBackend::Memory => SessionStores::new(Arc::new(MemoryTokenStore::new())),
        StorageBackend::File => SessionStores::new(Arc::new(FileTokenStore::new(&config.path))),
        StorageBackend::Keychain => {
            SessionStores::new(Arc::new(KeychainTokenStore::new(&config.keychain_service)?))
        }
    };

    info!(backend = config.backend.as_str(), "credential store ready");
    Ok(stores)
}
