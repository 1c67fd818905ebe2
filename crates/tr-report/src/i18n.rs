//! Localized message lookup.
//!
//! Reports look up short UI strings (unit abbreviations, column headings) by
//! key for the locale of the current request. The catalog is a plain value
//! owned by the host and passed to each request; there is no global loader.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tr_common::ApplicationSettings;

use crate::error::{ReportError, Result};

/// Name of the request parameter selecting the report locale.
pub const LOCALE_PARAM: &str = "locale";

/// Locale consulted when neither the requested locale nor its language has the key.
pub const FALLBACK_LOCALE: &str = "en";

const BUNDLED: [(&str, &str); 5] = [
    ("en", include_str!("../messages/en.json")),
    ("de", include_str!("../messages/de.json")),
    ("ru", include_str!("../messages/ru.json")),
    ("fr", include_str!("../messages/fr.json")),
    ("es", include_str!("../messages/es.json")),
];

/// Source of localized strings.
pub trait MessageCatalog {
    /// Text for `key` in `locale`.
    fn message(&self, locale: &str, key: &str) -> String;
}

/// In-memory `locale -> key -> text` catalog.
///
/// Lookup tries the exact locale (`pt_BR`), then its language (`pt`), then
/// [`FALLBACK_LOCALE`], and finally returns the key itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticCatalog {
    locales: HashMap<String, HashMap<String, String>>,
}

impl StaticCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the message files shipped with this crate.
    pub fn bundled() -> Result<Self> {
        let mut catalog = Self::new();
        for (locale, json) in BUNDLED {
            catalog.add_locale_json(locale, json)?;
        }
        Ok(catalog)
    }

    /// Load a whole catalog from `{"locale": {"key": "text"}}` JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: StaticCatalog = serde_json::from_str(json)?;
        Ok(catalog)
    }

    /// Merge a `{"key": "text"}` JSON object into `locale`.
    pub fn add_locale_json(&mut self, locale: &str, json: &str) -> Result<()> {
        let messages: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| ReportError::InvalidCatalog(format!("locale '{}': {}", locale, e)))?;
        self.locales
            .entry(locale.to_string())
            .or_default()
            .extend(messages);
        Ok(())
    }

    /// Insert a single message.
    pub fn insert(&mut self, locale: impl Into<String>, key: impl Into<String>, text: impl Into<String>) {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Locales with at least one message.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }
}

impl MessageCatalog for StaticCatalog {
    fn message(&self, locale: &str, key: &str) -> String {
        let language = language_of(locale);
        self.lookup(locale, key)
            .or_else(|| self.lookup(language, key))
            .or_else(|| self.lookup(FALLBACK_LOCALE, key))
            .unwrap_or(key)
            .to_string()
    }
}

fn language_of(locale: &str) -> &str {
    locale
        .split(|c| c == '_' || c == '-')
        .next()
        .unwrap_or(locale)
}

/// Locale for a request: the `locale` parameter when present and non-empty,
/// otherwise the application's configured language.
pub fn resolve_locale(param: Option<&str>, app: &ApplicationSettings) -> String {
    match param.map(str::trim) {
        Some(locale) if !locale.is_empty() => locale.to_string(),
        _ => app.language.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = StaticCatalog::bundled().unwrap();
        assert_eq!(catalog.locales(), vec!["de", "en", "es", "fr", "ru"]);
        assert_eq!(catalog.message("en", "day"), "d");
        assert_eq!(catalog.message("ru", "minute"), "мин");
    }

    #[test]
    fn test_bundled_locales_share_duration_keys() {
        let catalog = StaticCatalog::bundled().unwrap();
        for locale in catalog.locales() {
            for key in ["day", "hour", "minute", "second"] {
                assert!(
                    catalog.lookup(locale, key).is_some(),
                    "locale {} is missing {}",
                    locale,
                    key
                );
            }
        }
    }

    #[test]
    fn test_lookup_falls_back_to_language_then_english_then_key() {
        let mut catalog = StaticCatalog::new();
        catalog.insert("en", "hour", "h");
        catalog.insert("pt", "hour", "hora");
        catalog.insert("pt_BR", "second", "seg");

        assert_eq!(catalog.message("pt_BR", "second"), "seg");
        assert_eq!(catalog.message("pt_BR", "hour"), "hora");
        assert_eq!(catalog.message("pt-PT", "hour"), "hora");
        assert_eq!(catalog.message("ja", "hour"), "h");
        assert_eq!(catalog.message("ja", "fortnight"), "fortnight");
    }

    #[test]
    fn test_from_json() {
        let catalog =
            StaticCatalog::from_json(r#"{"nl": {"day": "d", "hour": "u"}}"#).unwrap();
        assert_eq!(catalog.message("nl", "hour"), "u");
    }

    #[test]
    fn test_add_locale_json_rejects_malformed_input() {
        let mut catalog = StaticCatalog::new();
        let err = catalog.add_locale_json("it", "[1, 2]").unwrap_err();
        assert!(matches!(err, ReportError::InvalidCatalog(_)));
    }

    #[test]
    fn test_resolve_locale() {
        let app = ApplicationSettings::default().with_language("de");
        assert_eq!(resolve_locale(Some("ru"), &app), "ru");
        assert_eq!(resolve_locale(None, &app), "de");
        assert_eq!(resolve_locale(Some(""), &app), "de");
    }
}
