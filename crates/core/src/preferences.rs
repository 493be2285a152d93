//! Display language preference

use std::sync::Arc;

use orion_domain::{Language, Result};
use tracing::{debug, warn};

use crate::session::ports::PreferenceStore;

/// Reads and saves the dashboard language.
pub struct LanguagePreferences {
    store: Arc<dyn PreferenceStore>,
}

impl LanguagePreferences {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Language to display for a user whose system reports `locale`.
    ///
    /// A store that cannot be read counts as having no saved preference.
    pub async fn current(&self, locale: Option<&str>) -> Language {
        let saved = match self.store.language().await {
            Ok(saved) => saved,
            Err(err) => {
                warn!(error = %err, "failed to read language preference");
                None
            }
        };

        let language = Language::resolve(saved.as_deref(), locale);
        debug!(%language, saved = ?saved, locale = ?locale, "language resolved");
        language
    }

    pub async fn change(&self, language: Language) -> Result<()> {
        self.store.store_language(language).await
    }
}
