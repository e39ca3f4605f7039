//! Build the site, then serve it with the locale redirect and contact API.
//!
//! Usage:
//!   cargo run                  # build into SITE_OUTPUT_DIR and serve on PORT
//!
//! Optional environment variables:
//! - SITE_DATA_DIR (defaults to data)
//! - SITE_PUBLIC_DIR (defaults to public)
//! - SITE_OUTPUT_DIR (defaults to out)
//! - SITE_BASE_URL (defaults to https://www.nebulainfinity.com)
//! - PORT (defaults to 3000)
//! - CONTACT_WEBHOOK_URL / CONTACT_WEBHOOK_TOKEN (log-only delivery when unset)

use anyhow::Result;
use nebula_site::builder::build_site;
use nebula_site::config::Config;
use nebula_site::contact::delivery_from_config;
use nebula_site::routing::LocaleResolver;
use nebula_site::server::{build_router, serve, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    nebula_site::init_logging()?;

    let config = Config::from_env()?;

    info!("Building site into {}", config.output_dir);
    let report = build_site(&config)?;
    info!(
        "Built {} pages and {} sitemap entries",
        report.pages_written, report.sitemap_entries
    );

    let state = AppState {
        resolver: Arc::new(LocaleResolver::default()),
        delivery: delivery_from_config(&config)?,
        output_dir: config.output_dir.clone().into(),
        public_dir: config.public_dir.clone().into(),
    };

    serve(build_router(state), config.port).await
}
