//! Locale table.

use std::collections::BTreeMap;

use serde::Serialize;

/// Per-locale settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSettings {
    /// BCP 47 language tag (e.g. `en-US`).
    pub lang: String,
}

/// Mapping from mount path to locale settings.
///
/// Only a single default locale is populated here, but the generator's
/// shape supports multiple. `BTreeMap` keeps iteration order deterministic
/// so repeated builds serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocaleTable(BTreeMap<String, LocaleSettings>);

impl LocaleTable {
    /// Single-entry table mounting `lang` at the site root.
    #[must_use]
    pub fn single(lang: impl Into<String>) -> Self {
        let mut table = BTreeMap::new();
        table.insert(
            "/".to_owned(),
            LocaleSettings { lang: lang.into() },
        );
        Self(table)
    }

    /// Add a locale mounted at `path`.
    #[must_use]
    pub fn with_locale(mut self, path: impl Into<String>, lang: impl Into<String>) -> Self {
        self.0.insert(path.into(), LocaleSettings { lang: lang.into() });
        self
    }

    /// Settings for a mount path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&LocaleSettings> {
        self.0.get(path)
    }

    /// Number of configured locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no locales are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::single("en-US")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_is_single_english_root() {
        let table = LocaleTable::default();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("/").unwrap().lang, "en-US");
    }

    #[test]
    fn test_with_locale_extends_table() {
        let table = LocaleTable::default().with_locale("/de/", "de-DE");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("/de/").unwrap().lang, "de-DE");
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(LocaleTable::default()).unwrap();
        assert_eq!(json, serde_json::json!({"/": {"lang": "en-US"}}));
    }
}
