use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use turnup_cli::logging::init_logging;
use turnup_cli::{build_site, SiteConfig};

#[derive(Parser)]
#[command(name = "turnup")]
#[command(about = "Build a static HTML site from Markdown pages")]
#[command(version)]
struct Cli {
    /// Prefix for root-relative links, e.g. "/my-repo/" (defaults to "/")
    base_path: Option<String>,

    /// Config file
    #[arg(short, long, default_value = SiteConfig::DEFAULT_FILE)]
    config: PathBuf,

    /// Output directory (replaced on every build)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory of Markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// HTML template file
    #[arg(long)]
    template: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// Load the config file and apply command-line overrides
    fn into_config(self) -> Result<SiteConfig> {
        let mut config = SiteConfig::load(&self.config)?;

        if let Some(base_path) = self.base_path {
            config.base_path = base_path;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(template) = self.template {
            config.template = template;
        }
        if let Some(log_level) = self.log_level {
            config.log_level = log_level;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;
    init_logging(&config.log_level);

    let summary = build_site(&config)?;

    info!(
        pages = summary.pages,
        assets = summary.assets,
        output = %config.output_dir.display(),
        "site built"
    );
    Ok(())
}
