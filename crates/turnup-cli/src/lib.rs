//! turnup-cli - static site generator
//!
//! Walks a content directory of Markdown pages, converts each page with
//! `turnup`, fills an HTML template, and writes the result alongside a copy
//! of the static assets.
//!
//! ```text
//! static/   ──copy──────────────────────────▶ public/
//! content/  ──turnup──▶ template.html ──────▶ public/**/*.html
//! ```

pub mod config;
pub mod generate;
pub mod logging;
pub mod site;
pub mod static_files;

pub use config::SiteConfig;
pub use generate::{generate_page, generate_pages_recursive, render_page};
pub use site::{build_site, BuildSummary};
pub use static_files::copy_static;
