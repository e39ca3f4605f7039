//! Internationalization (i18n) for the bilingual site.
//!
//! All locale-dependent text is looked up here by key instead of branching
//! on the locale at each call site.
//!
//! # Architecture
//!
//! - `locale`: The closed `Locale` enum and its metadata
//! - `catalog`: Per-locale string tables loaded from JSON
//! - `validator`: Catalog parity checks run before each build
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Locale, Translations};
//!
//! let translations = Translations::load(Path::new("data/translations"))?;
//! let t = translations.for_locale(Locale::En);
//! assert_eq!(t.get("nav.home"), "Home");
//! ```

mod catalog;
mod locale;
mod validator;

pub use catalog::{Catalog, LocaleStrings, Translations};
pub use locale::Locale;
pub use validator::{CatalogValidator, ValidationReport};
