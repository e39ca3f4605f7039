//! HTML rendering with `maud`.
//!
//! Page code never branches on the locale; every string comes from the
//! locale's translation catalog.

pub mod components;
mod layout;
mod pages;

pub use layout::{PageMeta, CONTACT_EMAIL, SITE_NAME};
pub use pages::INQUIRY_TYPES;

use crate::content::ContentStore;
use crate::i18n::Translations;
use crate::routing::{RouteEntry, RouteTarget, StaticPage};
use tracing::warn;

/// Everything a page needs to render.
#[derive(Debug, Clone, Copy)]
pub struct SiteContext<'a> {
    pub translations: &'a Translations,
    pub content: &'a ContentStore,
    pub base_url: &'a str,
}

impl<'a> SiteContext<'a> {
    pub fn new(
        translations: &'a Translations,
        content: &'a ContentStore,
        base_url: &'a str,
    ) -> Self {
        Self {
            translations,
            content,
            base_url,
        }
    }

    /// `path` prefixed with the site's base URL.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// One rendered route.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    /// `false` when the route rendered the not-found state.
    pub found: bool,
}

/// Render a route to a complete HTML document.
///
/// A project slug with no matching record renders the locale's not-found
/// state instead of failing.
pub fn render_route(ctx: &SiteContext<'_>, entry: &RouteEntry) -> RenderedPage {
    let locale = entry.locale;
    let (found, (meta, body)) = match &entry.target {
        RouteTarget::Page(StaticPage::Home) => (true, pages::home(ctx, locale)),
        RouteTarget::Page(StaticPage::About) => (true, pages::about(ctx, locale)),
        RouteTarget::Page(StaticPage::Services) => (true, pages::services(ctx, locale)),
        RouteTarget::Page(StaticPage::Projects) => (true, pages::projects(ctx, locale)),
        RouteTarget::Page(StaticPage::Contact) => (true, pages::contact(ctx, locale)),
        RouteTarget::Project(slug) => match pages::project_detail(ctx, locale, slug) {
            Some(page) => (true, page),
            None => {
                warn!("No project '{}' for {}; rendering not-found", slug, entry.path());
                (false, pages::not_found(ctx, locale))
            }
        },
    };

    RenderedPage {
        html: layout::document(ctx, entry, &meta, body).into_string(),
        found,
    }
}

/// The site-wide 404 document (no locale context).
pub fn render_root_not_found(ctx: &SiteContext<'_>) -> String {
    layout::root_not_found(ctx).into_string()
}
