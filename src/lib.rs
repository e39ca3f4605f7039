//! Bilingual (Japanese/English) site for Nebula Infinity.
//!
//! The site is pre-rendered into static HTML by [`builder`] and served by
//! [`server`], which adds the locale redirect and the contact form endpoint.

pub mod builder;
pub mod config;
pub mod contact;
pub mod content;
pub mod i18n;
pub mod render;
pub mod retry;
pub mod routing;
pub mod server;
pub mod sitemap;

use anyhow::Result;

/// Install the global `tracing` subscriber, honouring `RUST_LOG`.
pub fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nebula_site=info".parse()?),
        )
        .init();
    Ok(())
}
