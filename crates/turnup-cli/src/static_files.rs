//! Static asset copying

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Replace `dest` with a fresh copy of everything under `src`.
///
/// Returns the number of files copied.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize> {
    reset_dir(dest)?;
    copy_dir(src, dest)
}

/// Delete a directory if it exists and recreate it empty
pub fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)
            .with_context(|| format!("failed to remove {}", dir.display()))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))
}

fn copy_dir(src: &Path, dest: &Path) -> Result<usize> {
    let mut entries = fs::read_dir(src)
        .with_context(|| format!("failed to read directory {}", src.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut copied = 0;
    for entry in entries {
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&to)
                .with_context(|| format!("failed to create {}", to.display()))?;
            copied += copy_dir(&from, &to)?;
        } else {
            info!(from = %from.display(), to = %to.display(), "copying static file");
            fs::copy(&from, &to)
                .with_context(|| format!("failed to copy {}", from.display()))?;
            copied += 1;
        }
    }

    Ok(copied)
}
