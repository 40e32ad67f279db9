//! Page generation
//!
//! Renders Markdown pages into an HTML template and writes them out,
//! mirroring the layout of the content directory.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Either placeholder, so both are filled in one pass over the template
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{ (Title|Content) \}\}").unwrap());

/// Render one Markdown page into the template.
///
/// Root-relative `href="/` and `src="/` attributes are rewritten to start
/// with `base_path`.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> Result<String> {
    let content = turnup::markdown_to_html(markdown)?;
    let title = turnup::extract_title(markdown).context("no title found")?;

    let page = fill_template(template, &title, &content);
    Ok(apply_base_path(&page, base_path))
}

/// Substitute `{{ Title }}` and `{{ Content }}`.
///
/// Inserted text is never scanned again, so a title or body containing a
/// placeholder is written out literally.
pub fn fill_template(template: &str, title: &str, content: &str) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| match &caps[0] {
            TITLE_PLACEHOLDER => title.to_string(),
            _ => content.to_string(),
        })
        .into_owned()
}

/// Generate a single page from a Markdown file
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path, base_path: &str) -> Result<()> {
    let template = read_template(template_path)?;
    write_page(from, template_path, &template, dest, base_path)
}

/// Generate a page for every `.md` file under `content_dir`.
///
/// `content/a/b.md` becomes `dest_dir/a/b.html`. Other files are skipped.
/// Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<usize> {
    let template = read_template(template_path)?;
    walk_content(content_dir, template_path, &template, dest_dir, base_path)
}

/// Ensure a base path starts and ends with `/`
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

fn apply_base_path(html: &str, base_path: &str) -> String {
    if base_path == "/" {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

fn read_template(template_path: &Path) -> Result<String> {
    fs::read_to_string(template_path)
        .with_context(|| format!("failed to read template {}", template_path.display()))
}

fn walk_content(
    content_dir: &Path,
    template_path: &Path,
    template: &str,
    dest_dir: &Path,
    base_path: &str,
) -> Result<usize> {
    let mut entries = fs::read_dir(content_dir)
        .with_context(|| format!("failed to read directory {}", content_dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut pages = 0;
    for entry in entries {
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            let sub_dest = dest_dir.join(entry.file_name());
            pages += walk_content(&path, template_path, template, &sub_dest, base_path)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let dest = dest_dir.join(entry.file_name()).with_extension("html");
            write_page(&path, template_path, template, &dest, base_path)?;
            pages += 1;
        } else {
            debug!(path = %path.display(), "skipping non-markdown file");
        }
    }

    Ok(pages)
}

fn write_page(
    from: &Path,
    template_path: &Path,
    template: &str,
    dest: &Path,
    base_path: &str,
) -> Result<()> {
    info!(
        from = %from.display(),
        to = %dest.display(),
        template = %template_path.display(),
        "generating page"
    );

    let markdown = fs::read_to_string(from)
        .with_context(|| format!("failed to read {}", from.display()))?;
    let html = render_page(&markdown, template, base_path)
        .with_context(|| format!("failed to render {}", from.display()))?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(dest, html).with_context(|| format!("failed to write {}", dest.display()))?;

    Ok(())
}
