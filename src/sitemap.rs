//! `sitemap.xml` generation from the build's route table.

use crate::routing::{RouteEntry, RouteTarget, StaticPage};
use chrono::NaiveDate;
use maud::{html, PreEscaped};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub change_frequency: ChangeFrequency,
    pub priority: &'static str,
}

impl SitemapEntry {
    /// Home ranks highest, other fixed pages next, project pages last.
    pub fn for_route(base_url: &str, entry: &RouteEntry) -> Self {
        let (change_frequency, priority) = match &entry.target {
            RouteTarget::Page(StaticPage::Home) => (ChangeFrequency::Weekly, "1.0"),
            RouteTarget::Page(_) => (ChangeFrequency::Weekly, "0.8"),
            RouteTarget::Project(_) => (ChangeFrequency::Monthly, "0.6"),
        };

        Self {
            url: format!("{}{}", base_url.trim_end_matches('/'), entry.path()),
            change_frequency,
            priority,
        }
    }
}

/// Render a sitemap document for `routes`, all stamped with `last_modified`.
pub fn render_sitemap(base_url: &str, routes: &[RouteEntry], last_modified: NaiveDate) -> String {
    let lastmod = last_modified.format("%Y-%m-%d").to_string();
    let entries: Vec<SitemapEntry> = routes
        .iter()
        .map(|route| SitemapEntry::for_route(base_url, route))
        .collect();

    let body = html! {
        (PreEscaped(XML_DECLARATION))
        urlset xmlns=(SITEMAP_NS) {
            @for entry in &entries {
                url {
                    loc { (entry.url) }
                    lastmod { (lastmod) }
                    changefreq { (entry.change_frequency.as_str()) }
                    priority { (entry.priority) }
                }
            }
        }
    };

    body.into_string()
}
