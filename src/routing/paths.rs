//! Build-time route enumeration.
//!
//! Produces every (locale, page) pair the site builder must pre-render:
//! the fixed pages once per locale, and one project detail page per
//! (locale, slug). Output order is locale-major and follows the input
//! record order, so re-running against the same content yields the same
//! table.

use crate::i18n::Locale;
use std::collections::HashSet;

/// Anything with a unique slug that gets its own detail page.
pub trait Slugged {
    fn slug(&self) -> &str;
}

impl Slugged for str {
    fn slug(&self) -> &str {
        self
    }
}

impl Slugged for String {
    fn slug(&self) -> &str {
        self
    }
}

impl<T: Slugged + ?Sized> Slugged for &T {
    fn slug(&self) -> &str {
        (**self).slug()
    }
}

/// Pages that exist once per locale regardless of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticPage {
    Home,
    About,
    Services,
    Projects,
    Contact,
}

impl StaticPage {
    pub const ALL: [StaticPage; 5] = [
        StaticPage::Home,
        StaticPage::About,
        StaticPage::Services,
        StaticPage::Projects,
        StaticPage::Contact,
    ];

    /// URL segment under the locale prefix (empty for home).
    pub fn segment(&self) -> &'static str {
        match self {
            StaticPage::Home => "",
            StaticPage::About => "about",
            StaticPage::Services => "services",
            StaticPage::Projects => "projects",
            StaticPage::Contact => "contact",
        }
    }

    /// Translation key for the page's navigation label.
    pub fn nav_key(&self) -> &'static str {
        match self {
            StaticPage::Home => "nav.home",
            StaticPage::About => "nav.about",
            StaticPage::Services => "nav.services",
            StaticPage::Projects => "nav.projects",
            StaticPage::Contact => "nav.contact",
        }
    }
}

/// What a route renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteTarget {
    Page(StaticPage),
    Project(String),
}

/// One page the build materializes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteEntry {
    pub locale: Locale,
    pub target: RouteTarget,
}

impl RouteEntry {
    pub fn page(locale: Locale, page: StaticPage) -> Self {
        Self {
            locale,
            target: RouteTarget::Page(page),
        }
    }

    pub fn project(locale: Locale, slug: impl Into<String>) -> Self {
        Self {
            locale,
            target: RouteTarget::Project(slug.into()),
        }
    }

    /// Public URL path, always with a trailing slash (`/en/projects/alpha/`).
    pub fn path(&self) -> String {
        match &self.target {
            RouteTarget::Page(StaticPage::Home) => format!("/{}/", self.locale),
            RouteTarget::Page(page) => format!("/{}/{}/", self.locale, page.segment()),
            RouteTarget::Project(slug) => format!("/{}/projects/{}/", self.locale, slug),
        }
    }

    /// Output file relative to the build directory.
    pub fn output_file(&self) -> String {
        format!("{}index.html", self.path().trim_start_matches('/'))
    }

    /// The same target under another locale.
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            locale,
            target: self.target.clone(),
        }
    }
}

/// Fixed pages: one entry per (locale, page).
pub fn enumerate_static_pages(locales: &[Locale]) -> Vec<RouteEntry> {
    locales
        .iter()
        .flat_map(|&locale| {
            StaticPage::ALL
                .into_iter()
                .map(move |page| RouteEntry::page(locale, page))
        })
        .collect()
}

/// Detail pages: one entry per (locale, record slug), duplicates dropped.
pub fn enumerate_detail_routes<R: Slugged>(locales: &[Locale], records: &[R]) -> Vec<RouteEntry> {
    let mut seen = HashSet::new();
    let mut routes = Vec::with_capacity(locales.len() * records.len());

    for &locale in locales {
        for record in records {
            let entry = RouteEntry::project(locale, record.slug());
            if seen.insert(entry.clone()) {
                routes.push(entry);
            }
        }
    }

    routes
}

/// The complete route table for a build.
pub fn route_table<R: Slugged>(locales: &[Locale], records: &[R]) -> Vec<RouteEntry> {
    let mut routes = enumerate_static_pages(locales);
    routes.extend(enumerate_detail_routes(locales, records));
    routes
}
