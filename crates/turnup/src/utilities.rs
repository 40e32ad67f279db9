//! Utility functions for working with Markdown documents.

/// Get the title of a document: the first line starting with `"# "`.
///
/// Leading and trailing `#` and space characters are stripped, then the
/// result is trimmed. Returns `None` when the document has no such line.
pub fn extract_title(markdown: &str) -> Option<String> {
    markdown
        .split('\n')
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_matches(['#', ' ']).trim().to_string())
}
