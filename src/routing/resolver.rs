//! Locale resolution for incoming request paths.
//!
//! Every page must be served under exactly one locale prefix. Paths that
//! already carry one pass through; everything else is redirected to the
//! same path under the default locale. Asset, API and media paths are never
//! touched.

use crate::i18n::Locale;

/// Path prefixes that are never locale-resolved.
const EXCLUDED_PREFIXES: [&str; 4] = ["/_next", "/api", "/images", "/videos"];

/// Outcome of resolving one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Serve the request as-is.
    PassThrough,
    /// Redirect the client to `location`.
    Redirect { location: String },
}

/// Stateless resolver over a fixed, ordered locale list.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    supported: Vec<Locale>,
    default: Locale,
}

impl LocaleResolver {
    pub fn new(supported: Vec<Locale>, default: Locale) -> Self {
        Self { supported, default }
    }

    pub fn default_locale(&self) -> Locale {
        self.default
    }

    /// Resolve a request path.
    ///
    /// Total over all inputs: an empty or malformed path is redirected to
    /// its default-locale equivalent.
    pub fn resolve(&self, path: &str) -> Resolution {
        if is_excluded(path) || self.locale_of(path).is_some() {
            return Resolution::PassThrough;
        }

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Resolution::Redirect {
            location: format!("/{}{}", self.default.code(), path),
        }
    }

    /// Resolve a path, carrying the query string over to the redirect target.
    pub fn resolve_uri(&self, path: &str, query: Option<&str>) -> Resolution {
        match self.resolve(path) {
            Resolution::Redirect { mut location } => {
                if let Some(query) = query.filter(|q| !q.is_empty()) {
                    location.push('?');
                    location.push_str(query);
                }
                Resolution::Redirect { location }
            }
            other => other,
        }
    }

    /// The locale a path is already prefixed with, if any.
    ///
    /// A path carries locale `L` when it is exactly `/L` or starts with `/L/`.
    pub fn locale_of(&self, path: &str) -> Option<Locale> {
        self.supported.iter().copied().find(|locale| {
            let Some(rest) = path
                .strip_prefix('/')
                .and_then(|p| p.strip_prefix(locale.code()))
            else {
                return false;
            };
            rest.is_empty() || rest.starts_with('/')
        })
    }
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new(Locale::ALL.to_vec(), Locale::DEFAULT)
    }
}

/// Whether a path bypasses locale resolution entirely.
pub fn is_excluded(path: &str) -> bool {
    EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
        || path.contains('.')
}
