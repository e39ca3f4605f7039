//! Locale type: the closed set of languages the site is published in.
//!
//! Every page and every internal link belongs to exactly one `Locale`.
//! Unknown tags never produce a `Locale` directly; `from_code` returns an
//! error for them.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported site locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Japanese (default)
    Ja,
    /// English
    En,
}

impl Locale {
    /// All supported locales, in routing order.
    pub const ALL: [Locale; 2] = [Locale::Ja, Locale::En];

    /// The locale used when a request carries none.
    pub const DEFAULT: Locale = Locale::Ja;

    /// Parse a locale tag.
    ///
    /// Matching is exact and case-sensitive: `"ja"` is valid, `"JA"` and
    /// `"ja-JP"` are not.
    ///
    /// # Example
    /// ```ignore
    /// let en = Locale::from_code("en")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Locale> {
        match Self::ALL.iter().find(|locale| locale.code() == code) {
            Some(locale) => Ok(*locale),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// The URL/BCP 47 tag (e.g., "ja", "en").
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }

    /// The language name in its own script (e.g., "日本語").
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::Ja => "日本語",
            Locale::En => "English",
        }
    }

    /// Open Graph locale identifier.
    pub fn og_locale(&self) -> &'static str {
        match self {
            Locale::Ja => "ja_JP",
            Locale::En => "en_US",
        }
    }

    /// Short uppercase label shown on the language toggle.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Locale::Ja => "JA",
            Locale::En => "EN",
        }
    }

    /// Check if this is the default locale.
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// The locale the language toggle switches to.
    pub fn other(&self) -> Locale {
        match self {
            Locale::Ja => Locale::En,
            Locale::En => Locale::Ja,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
