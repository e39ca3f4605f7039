//! Translation catalogs: one flattened string table per locale.
//!
//! Catalogs are loaded once at build time from `translations/{code}.json`
//! and are immutable thereafter. Nested JSON objects become dotted keys, so
//! `{"contact": {"form": {"name": "Name"}}}` is looked up as
//! `contact.form.name`.

use crate::i18n::Locale;
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{info, warn};

/// Flattened key/value strings for a single locale.
pub type Catalog = BTreeMap<String, String>;

/// Read-only map from every supported locale to its catalog.
#[derive(Debug, Clone)]
pub struct Translations {
    catalogs: HashMap<Locale, Catalog>,
}

impl Translations {
    /// Load every locale's catalog from `dir/{code}.json`.
    ///
    /// A missing or malformed file for any supported locale is fatal.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut catalogs = HashMap::new();

        for locale in Locale::ALL {
            let path = dir.join(format!("{}.json", locale.code()));
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read translations from {}", path.display()))?;
            let value: Value = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse translations in {}", path.display()))?;

            let catalog = flatten(&value)
                .with_context(|| format!("Invalid translation catalog {}", path.display()))?;
            info!("Loaded {} strings for locale '{}'", catalog.len(), locale);
            catalogs.insert(locale, catalog);
        }

        Ok(Self { catalogs })
    }

    /// Build translations from in-memory JSON values, keyed by locale.
    pub fn from_values(values: impl IntoIterator<Item = (Locale, Value)>) -> Result<Self> {
        let mut catalogs = HashMap::new();
        for (locale, value) in values {
            catalogs.insert(locale, flatten(&value)?);
        }
        Ok(Self { catalogs })
    }

    /// Look up a string.
    ///
    /// Falls back to the default locale's value, then to the key itself.
    pub fn get<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        if let Some(value) = self.lookup(locale, key) {
            return value;
        }
        if let Some(value) = self.lookup(Locale::DEFAULT, key) {
            return value;
        }
        warn!("Missing translation key '{}' for locale '{}'", key, locale);
        key
    }

    /// Look up a string without any fallback.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.catalogs
            .get(&locale)
            .and_then(|catalog| catalog.get(key))
            .map(String::as_str)
    }

    /// A bound view for one locale, so page code reads `t.get("nav.home")`.
    pub fn for_locale(&self, locale: Locale) -> LocaleStrings<'_> {
        LocaleStrings {
            translations: self,
            locale,
        }
    }

    /// The catalog for a locale, if loaded.
    pub fn catalog(&self, locale: Locale) -> Option<&Catalog> {
        self.catalogs.get(&locale)
    }

}

/// Translations bound to a single locale.
#[derive(Debug, Clone, Copy)]
pub struct LocaleStrings<'a> {
    translations: &'a Translations,
    locale: Locale,
}

impl<'a> LocaleStrings<'a> {
    pub fn get(&self, key: &'a str) -> &'a str {
        self.translations.get(self.locale, key)
    }

    /// Look up a key built at runtime (e.g. `format!("services.{}.title", key)`).
    pub fn get_owned(&self, key: &str) -> String {
        self.translations.get(self.locale, key).to_string()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

/// Flatten a nested JSON object into dotted keys.
///
/// Only objects and strings are allowed; the root must be an object.
fn flatten(value: &Value) -> Result<Catalog> {
    if !value.is_object() {
        bail!("Translation catalog root must be a JSON object");
    }
    let mut catalog = Catalog::new();
    flatten_into(value, String::new(), &mut catalog)?;
    Ok(catalog)
}

fn flatten_into(value: &Value, prefix: String, catalog: &mut Catalog) -> Result<()> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(child, path, catalog)?;
            }
            Ok(())
        }
        Value::String(s) => {
            catalog.insert(prefix, s.clone());
            Ok(())
        }
        other => bail!(
            "Translation value at '{}' must be a string or object, found {}",
            prefix,
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Translations {
        Translations::from_values([
            (
                Locale::Ja,
                json!({
                    "nav": { "home": "ホーム", "about": "会社概要" },
                    "footer": { "copyright": "© Nebula Infinity" }
                }),
            ),
            (
                Locale::En,
                json!({
                    "nav": { "home": "Home" }
                }),
            ),
        ])
        .expect("valid catalogs")
    }

    // ==================== Flatten Tests ====================

    #[test]
    fn test_flatten_nested_keys() {
        let catalog = flatten(&json!({"a": {"b": {"c": "deep"}}, "top": "x"})).unwrap();
        assert_eq!(catalog.get("a.b.c").map(String::as_str), Some("deep"));
        assert_eq!(catalog.get("top").map(String::as_str), Some("x"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_flatten_rejects_non_object_root() {
        assert!(flatten(&json!("just a string")).is_err());
        assert!(flatten(&json!(["a", "b"])).is_err());
    }

    #[test]
    fn test_flatten_rejects_numbers() {
        let err = flatten(&json!({"count": 3})).unwrap_err();
        assert!(err.to_string().contains("count"));
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_get_direct_hit() {
        let t = sample();
        assert_eq!(t.get(Locale::En, "nav.home"), "Home");
        assert_eq!(t.get(Locale::Ja, "nav.home"), "ホーム");
    }

    #[test]
    fn test_get_falls_back_to_default_locale() {
        let t = sample();
        assert_eq!(t.get(Locale::En, "nav.about"), "会社概要");
    }

    #[test]
    fn test_get_falls_back_to_key() {
        let t = sample();
        assert_eq!(t.get(Locale::En, "does.not.exist"), "does.not.exist");
    }

    #[test]
    fn test_lookup_has_no_fallback() {
        let t = sample();
        assert_eq!(t.lookup(Locale::En, "nav.about"), None);
    }

    #[test]
    fn test_for_locale_view() {
        let t = sample();
        let en = t.for_locale(Locale::En);
        assert_eq!(en.locale(), Locale::En);
        assert_eq!(en.get("nav.home"), "Home");
    }

    // ==================== Load Tests ====================

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ja.json"), r#"{"nav":{"home":"ホーム"}}"#).unwrap();
        std::fs::write(dir.path().join("en.json"), r#"{"nav":{"home":"Home"}}"#).unwrap();

        let t = Translations::load(dir.path()).expect("Should load");
        assert_eq!(t.get(Locale::En, "nav.home"), "Home");
    }

    #[test]
    fn test_load_missing_locale_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ja.json"), r#"{"nav":{"home":"ホーム"}}"#).unwrap();

        let err = Translations::load(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("en.json"));
    }

    #[test]
    fn test_load_malformed_json_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ja.json"), "{not json").unwrap();
        std::fs::write(dir.path().join("en.json"), "{}").unwrap();

        assert!(Translations::load(dir.path()).is_err());
    }
}
