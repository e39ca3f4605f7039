use crate::config::Config;
use crate::content::ContentStore;
use crate::i18n::{CatalogValidator, Locale, Translations};
use crate::render::{render_root_not_found, render_route, SiteContext};
use crate::routing::{route_table, RouteEntry};
use crate::sitemap::render_sitemap;
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Summary of one build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub pages_written: usize,
    /// Routes that rendered the not-found state.
    pub not_found: Vec<String>,
    pub sitemap_entries: usize,
    /// Files under a locale directory left over from an earlier build.
    pub pages_pruned: usize,
    /// Files copied from the public directory.
    pub assets_copied: usize,
}

/// Renders every route of the site into a static directory tree.
pub struct SiteBuilder<'a> {
    ctx: SiteContext<'a>,
    output_dir: PathBuf,
    public_dir: Option<PathBuf>,
    build_date: NaiveDate,
}

impl<'a> SiteBuilder<'a> {
    pub fn new(ctx: SiteContext<'a>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            ctx,
            output_dir: output_dir.into(),
            public_dir: None,
            build_date: Utc::now().date_naive(),
        }
    }

    /// Copy static assets (stylesheets, images) from `dir` into the output.
    pub fn with_public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = Some(dir.into());
        self
    }

    /// Override the date stamped into the sitemap.
    pub fn with_build_date(mut self, date: NaiveDate) -> Self {
        self.build_date = date;
        self
    }

    pub fn build(&self) -> Result<BuildReport> {
        let report = CatalogValidator::validate(self.ctx.translations);
        for error in &report.errors {
            warn!("Translation error: {}", error);
        }
        for warning in &report.warnings {
            warn!("Translation warning: {}", warning);
        }

        let routes = route_table(&Locale::ALL, self.ctx.content.projects());
        info!("Rendering {} routes into {}", routes.len(), self.output_dir.display());

        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory {}", self.output_dir.display())
        })?;

        let mut not_found = Vec::new();
        for route in &routes {
            let page = render_route(&self.ctx, route);
            if !page.found {
                not_found.push(route.path());
            }
            self.write(&route.output_file(), &page.html)?;
        }

        let pages_pruned = self.prune_stale_pages(&routes)?;

        self.write("404.html", &render_root_not_found(&self.ctx))?;
        self.write(
            "sitemap.xml",
            &render_sitemap(self.ctx.base_url, &routes, self.build_date),
        )?;

        let mut assets_copied = 0;
        if let Some(public_dir) = self.public_dir.as_deref().filter(|dir| dir.is_dir()) {
            copy_dir_recursive(public_dir, &self.output_dir, &mut assets_copied)?;
        }

        info!(
            "✓ Built {} pages ({} not found, {} stale removed), copied {} assets",
            routes.len(),
            not_found.len(),
            pages_pruned,
            assets_copied
        );

        Ok(BuildReport {
            pages_written: routes.len(),
            not_found,
            sitemap_entries: routes.len(),
            pages_pruned,
            assets_copied,
        })
    }

    /// Remove files under each `{locale}/` directory that no route rendered
    /// this time, e.g. pages of projects dropped from the index. Nothing
    /// outside the locale directories is touched.
    fn prune_stale_pages(&self, routes: &[RouteEntry]) -> Result<usize> {
        let keep: HashSet<PathBuf> = routes
            .iter()
            .map(|route| self.output_dir.join(route.output_file()))
            .collect();

        let mut removed = 0;
        for locale in Locale::ALL {
            let dir = self.output_dir.join(locale.code());
            if dir.is_dir() {
                prune_dir(&dir, &keep, &mut removed)?;
            }
        }
        Ok(removed)
    }

    fn write(&self, relative: &str, contents: &str) -> Result<()> {
        let path = self.output_dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// Delete every file in `dir` not listed in `keep`, then any directory
/// left empty. Returns whether `dir` itself ended up empty.
fn prune_dir(dir: &Path, keep: &HashSet<PathBuf>, removed: &mut usize) -> Result<bool> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;

    let mut empty = true;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            if prune_dir(&path, keep, removed)? {
                std::fs::remove_dir(&path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
            } else {
                empty = false;
            }
        } else if keep.contains(&path) {
            empty = false;
        } else {
            debug!("Removing stale page {}", path.display());
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
            *removed += 1;
        }
    }

    Ok(empty)
}

/// Mirror `src_dir` into `dest_dir`, overwriting existing files.
fn copy_dir_recursive(src_dir: &Path, dest_dir: &Path, count: &mut usize) -> Result<()> {
    let entries = std::fs::read_dir(src_dir)
        .with_context(|| format!("Failed to read {}", src_dir.display()))?;

    for entry in entries {
        let src_path = entry?.path();
        let Some(file_name) = src_path.file_name() else {
            continue;
        };
        let dest_path = dest_dir.join(file_name);

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dest_path, count)?;
        } else {
            std::fs::create_dir_all(dest_dir)
                .with_context(|| format!("Failed to create directory {}", dest_dir.display()))?;
            std::fs::copy(&src_path, &dest_path).with_context(|| {
                format!("Failed to copy {} to {}", src_path.display(), dest_path.display())
            })?;
            *count += 1;
        }
    }

    Ok(())
}

/// Load content and translations from the configured data directory and
/// build the site. Any content loading failure aborts the build.
pub fn build_site(config: &Config) -> Result<BuildReport> {
    let data_dir = Path::new(&config.data_dir);
    let translations = Translations::load(&data_dir.join("translations"))?;
    let content = ContentStore::load(data_dir).context("Failed to load project content")?;

    let ctx = SiteContext::new(&translations, &content, &config.base_url);
    SiteBuilder::new(ctx, &config.output_dir)
        .with_public_dir(&config.public_dir)
        .build()
}
