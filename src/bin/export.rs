//! Static export - renders every page, `404.html` and `sitemap.xml` without
//! starting a server.
//!
//! Usage:
//!   cargo run --bin export
//!
//! Reads the same environment variables as the main binary; only the
//! SITE_* directories and SITE_BASE_URL matter here.

use anyhow::{bail, Result};
use nebula_site::builder::build_site;
use nebula_site::config::Config;
use tracing::{info, warn};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    nebula_site::init_logging()?;

    let config = Config::from_env()?;
    let report = build_site(&config)?;

    for path in &report.not_found {
        warn!("Rendered not-found page for {}", path);
    }
    if !report.not_found.is_empty() {
        bail!("{} routes rendered as not found", report.not_found.len());
    }

    info!(
        "✓ Exported {} pages to {} ({} sitemap entries)",
        report.pages_written, config.output_dir, report.sitemap_entries
    );
    Ok(())
}
