//! Dashboard display language

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::OrionError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Vi,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vi => "vi",
            Self::En => "en",
        }
    }

    /// Pick the language to display.
    ///
    /// A saved preference wins when it names a supported language; otherwise
    /// the primary subtag of `locale` (`en-US` -> `en`) is tried, and `vi` is
    /// the fallback.
    pub fn resolve(saved: Option<&str>, locale: Option<&str>) -> Self {
        saved
            .and_then(|value| value.parse().ok())
            .or_else(|| locale.and_then(Self::from_locale))
            .unwrap_or_default()
    }

    fn from_locale(locale: &str) -> Option<Self> {
        let primary = locale.split(['-', '_', '.']).next()?;
        primary.parse().ok()
    }
}

impl FromStr for Language {
    type Err = OrionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vi" => Ok(Self::Vi),
            "en" => Ok(Self::En),
            other => Err(OrionError::InvalidInput(format!("Unsupported language: {other}"))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_preference_wins() {
        assert_eq!(Language::resolve(Some("en"), Some("vi-VN")), Language::En);
    }

    #[test]
    fn falls_back_to_locale_then_vietnamese() {
        assert_eq!(Language::resolve(None, Some("en-US")), Language::En);
        assert_eq!(Language::resolve(Some("fr"), Some("en_GB.UTF-8")), Language::En);
        assert_eq!(Language::resolve(Some("fr"), Some("de-DE")), Language::Vi);
        assert_eq!(Language::resolve(None, None), Language::Vi);
    }
}
