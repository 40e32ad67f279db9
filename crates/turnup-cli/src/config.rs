use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Site layout and build settings, read from `turnup.toml`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory of Markdown pages
    pub content_dir: PathBuf,
    /// Directory of assets copied as-is
    pub static_dir: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    pub template: PathBuf,
    /// Directory the site is written to (replaced on every build)
    pub output_dir: PathBuf,
    /// Prefix for root-relative `href` and `src` attributes
    pub base_path: String,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            base_path: "/".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub const DEFAULT_FILE: &'static str = "turnup.toml";

    /// Load config from a TOML file, or return defaults if it does not exist.
    ///
    /// A file that exists but cannot be parsed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content)
                .with_context(|| format!("invalid config file {}", path.display())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read config file {}", path.display()))
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
