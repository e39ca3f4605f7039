//! Locale-prefixed routing.
//!
//! - `resolver`: request-time locale prefix check and default-locale redirect
//! - `middleware`: the resolver as an axum middleware
//! - `paths`: build-time enumeration of every (locale, page) to pre-render

mod middleware;
mod paths;
mod resolver;

pub use middleware::redirect_to_default_locale;
pub use paths::{
    enumerate_detail_routes, enumerate_static_pages, route_table, RouteEntry, RouteTarget,
    Slugged, StaticPage,
};
pub use resolver::{is_excluded, LocaleResolver, Resolution};
