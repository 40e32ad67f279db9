//! Whole-site build: static assets plus generated pages.

use anyhow::Result;
use tracing::warn;

use crate::config::SiteConfig;
use crate::generate::{generate_pages_recursive, normalize_base_path};
use crate::static_files::{copy_static, reset_dir};

/// Counts reported after a build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub assets: usize,
}

/// Build the site described by `config`.
///
/// The output directory is cleared first. Any page that fails to convert
/// aborts the build.
pub fn build_site(config: &SiteConfig) -> Result<BuildSummary> {
    let base_path = normalize_base_path(&config.base_path);

    let assets = if config.static_dir.is_dir() {
        copy_static(&config.static_dir, &config.output_dir)?
    } else {
        warn!(dir = %config.static_dir.display(), "static directory not found, skipping assets");
        reset_dir(&config.output_dir)?;
        0
    };

    let pages = generate_pages_recursive(
        &config.content_dir,
        &config.template,
        &config.output_dir,
        &base_path,
    )?;

    Ok(BuildSummary { pages, assets })
}
