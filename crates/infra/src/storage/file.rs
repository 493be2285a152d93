//! JSON session file
//!
//! The file holds one object with optional `access_token`, `refresh_token`
//! and `language` keys. Writes go to a sibling `.tmp` file that is synced
//! and renamed over the original, so a crash never leaves a torn file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use orion_core::{PreferenceStore, TokenStore};
use orion_domain::{CredentialPair, Language, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use crate::errors::InfraError;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SessionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

/// Token and preference store backed by a JSON file.
pub struct FileTokenStore {
    path: PathBuf,
    // Serializes read-modify-write cycles
    lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<SessionRecord> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SessionRecord::default());
            }
            Err(e) => return Err(InfraError::from(e).into()),
        };

        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(SessionRecord::default());
        }

        match serde_json::from_slice(&data) {
            Ok(record) => Ok(record),
            Err(e) => {
                // A corrupt file means no usable session; the next write replaces it
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable session file");
                Ok(SessionRecord::default())
            }
        }
    }

    #[instrument(skip(self, record), fields(path = %self.path.display()))]
    async fn write(&self, record: &SessionRecord) -> Result<()> {
        let data = serde_json::to_vec_pretty(record).map_err(InfraError::from)?;
        let temp_path = self.path.with_extension("tmp");

        if let Some(parent) = temp_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(InfraError::from)?;
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&temp_path).await.map_err(InfraError::from)?;
        file.write_all(&data).await.map_err(InfraError::from)?;
        file.sync_all().await.map_err(InfraError::from)?;
        drop(file);

        fs::rename(&temp_path, &self.path).await.map_err(InfraError::from)?;
        debug!(bytes = data.len(), "session file written");
        Ok(())
    }

    async fn update<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut SessionRecord) + Send,
    {
        let _guard = self.lock.lock().await;
        let mut record = self.read().await?;
        let before = record.clone();
        change(&mut record);
        if record == before {
            return Ok(());
        }
        self.write(&record).await
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn access_token(&self) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.access_token)
    }

    async fn refresh_token(&self) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.refresh_token)
    }

    async fn store_credentials(&self, credentials: &CredentialPair) -> Result<()> {
        self.update(|record| {
            record.access_token = Some(credentials.access_token.clone());
            record.refresh_token = Some(credentials.refresh_token.clone());
        })
        .await
    }

    async fn store_access_token(&self, token: &str) -> Result<()> {
        self.update(|record| record.access_token = Some(token.to_string())).await
    }

    async fn store_refresh_token(&self, token: &str) -> Result<()> {
        self.update(|record| record.refresh_token = Some(token.to_string())).await
    }

    async fn clear(&self) -> Result<()> {
        self.update(|record| {
            record.access_token = None;
            record.refresh_token = None;
        })
        .await
    }
}

#[async_trait]
impl PreferenceStore for FileTokenStore {
    async fn language(&self) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.language)
    }

    async fn store_language(&self, language: Language) -> Result<()> {
        self.update(|record| record.language = Some(language.as_str().to_string())).await
    }
}
