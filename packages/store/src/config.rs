//! # App settings — the `settings` key
//!
//! Small TOML document persisted next to the profile record. Today it only
//! carries the display language chosen on the settings screen.
//!
//! ```toml
//! [locale]
//! language = "fr"   # "en" (default) or "fr"
//! ```
//!
//! All structs derive `Default` so that a missing or empty document is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level settings document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub locale: LocaleSettings,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocaleSettings {
    #[serde(default)]
    pub language: Language,
}

/// Languages with a translation table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }
}

impl AppSettings {
    /// Builder method to set the display language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.locale.language = language;
        self
    }

    /// The storage key the settings document lives under.
    pub fn key() -> &'static str {
        "settings"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(AppSettings::from_toml("").unwrap(), AppSettings::default());
    }

    #[test]
    fn test_language_serializes_lowercase() {
        let toml = AppSettings::default().with_language(Language::Fr).to_toml().unwrap();
        assert!(toml.contains("language = \"fr\""));
        assert_eq!(
            AppSettings::from_toml(&toml).unwrap().locale.language,
            Language::Fr
        );
    }

    #[test]
    fn test_language_codes() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("de"), None);
    }
}
