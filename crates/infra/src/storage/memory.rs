use async_trait::async_trait;
use orion_core::{PreferenceStore, TokenStore};
use orion_domain::{CredentialPair, Language, Result};
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct Slots {
    access: Option<String>,
    refresh: Option<String>,
    language: Option<String>,
}

/// Process-local store. Nothing survives a restart; used by tests and
/// short-lived tools.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slots: Mutex<Slots>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(credentials: CredentialPair) -> Self {
        let slots = Slots {
            access: Some(credentials.access_token),
            refresh: Some(credentials.refresh_token),
            language: None,
        };
        Self { slots: Mutex::new(slots) }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.slots.lock().access.clone())
    }

    async fn refresh_token(&self) -> Result<Option<String>> {
        Ok(self.slots.lock().refresh.clone())
    }

    async fn store_credentials(&self, credentials: &CredentialPair) -> Result<()> {
        let mut slots = self.slots.lock();
        slots.access = Some(credentials.access_token.clone());
        slots.refresh = Some(credentials.refresh_token.clone());
        Ok(())
    }

    async fn store_access_token(&self, token: &str) -> Result<()> {
        self.slots.lock().access = Some(token.to_string());
        Ok(())
    }

    async fn store_refresh_token(&self, token: &str) -> Result<()> {
        self.slots.lock().refresh = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut slots = self.slots.lock();
        slots.access = None;
        slots.refresh = None;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for MemoryTokenStore {
    async fn language(&self) -> Result<Option<String>> {
        Ok(self.slots.lock().language.clone())
    }

    async fn store_language(&self, language: Language) -> Result<()> {
        self.slots.lock().language = Some(language.as_str().to_string());
        Ok(())
    }
}
