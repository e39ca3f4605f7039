//! Translation catalog validation.
//!
//! Checks that every locale carries the same set of keys as the default
//! locale, and that `{placeholder}` tokens survive translation.

use crate::i18n::{Locale, Translations};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys the default locale defines but another locale lacks
    pub errors: Vec<String>,

    /// Non-critical findings (extra keys, placeholder drift)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog parity across locales.
pub struct CatalogValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Compare every non-default catalog against the default locale's catalog.
    pub fn validate(translations: &Translations) -> ValidationReport {
        let mut report = ValidationReport::new();

        let Some(reference) = translations.catalog(Locale::DEFAULT) else {
            report.errors.push(format!(
                "No catalog loaded for default locale '{}'",
                Locale::DEFAULT
            ));
            return report;
        };

        for locale in Locale::ALL.into_iter().filter(|l| !l.is_default()) {
            let Some(catalog) = translations.catalog(locale) else {
                report
                    .errors
                    .push(format!("No catalog loaded for locale '{}'", locale));
                continue;
            };

            for (key, reference_value) in reference {
                match catalog.get(key) {
                    None => report
                        .errors
                        .push(format!("Locale '{}' is missing key '{}'", locale, key)),
                    Some(value) => {
                        let expected = Self::extract_placeholders(reference_value);
                        let actual = Self::extract_placeholders(value);
                        if expected != actual {
                            report.warnings.push(format!(
                                "Placeholder mismatch for '{}': '{}' has {:?}, '{}' has {:?}",
                                key,
                                Locale::DEFAULT,
                                expected,
                                locale,
                                actual
                            ));
                        }
                    }
                }
            }

            for key in catalog.keys().filter(|k| !reference.contains_key(*k)) {
                report.warnings.push(format!(
                    "Locale '{}' defines key '{}' unknown to '{}'",
                    locale,
                    key,
                    Locale::DEFAULT
                ));
            }
        }

        report
    }

    /// Extract all `{placeholder}` names from a string
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").expect("valid regex"));

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn translations(ja: serde_json::Value, en: serde_json::Value) -> Translations {
        Translations::from_values([(Locale::Ja, ja), (Locale::En, en)]).unwrap()
    }

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_single() {
        let found = CatalogValidator::extract_placeholders("© {year} Nebula Infinity");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["year"]);
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(CatalogValidator::extract_placeholders("No tokens here").is_empty());
    }

    #[test]
    fn test_extract_placeholders_ignores_non_identifiers() {
        assert!(CatalogValidator::extract_placeholders("{ spaced } {1abc}").is_empty());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_clean() {
        let t = translations(
            json!({"nav": {"home": "ホーム"}}),
            json!({"nav": {"home": "Home"}}),
        );
        let report = CatalogValidator::validate(&t);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_validate_missing_key_is_error() {
        let t = translations(
            json!({"nav": {"home": "ホーム", "about": "会社概要"}}),
            json!({"nav": {"home": "Home"}}),
        );
        let report = CatalogValidator::validate(&t);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("nav.about"));
    }

    #[test]
    fn test_validate_extra_key_is_warning() {
        let t = translations(
            json!({"nav": {"home": "ホーム"}}),
            json!({"nav": {"home": "Home", "blog": "Blog"}}),
        );
        let report = CatalogValidator::validate(&t);
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("nav.blog"));
    }

    #[test]
    fn test_validate_placeholder_mismatch_is_warning() {
        let t = translations(
            json!({"footer": {"copyright": "© {year} ネビュラ"}}),
            json!({"footer": {"copyright": "© Nebula"}}),
        );
        let report = CatalogValidator::validate(&t);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("footer.copyright"));
    }

    #[test]
    fn test_validate_missing_catalog_is_error() {
        let t = Translations::from_values([(Locale::Ja, json!({"a": "b"}))]).unwrap();
        let report = CatalogValidator::validate(&t);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("'en'"));
    }

    #[test]
    fn test_report_default_is_clean() {
        assert!(ValidationReport::default().is_clean());
    }
}
