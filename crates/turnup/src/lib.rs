//! # turnup
//!
//! Convert Markdown to HTML.
//!
//! turnup handles a small, fixed subset of Markdown: paragraphs, ATX headings,
//! fenced code blocks, block quotes, and flat ordered and unordered lists,
//! with bold, italic, inline code, links, and images inside text.
//!
//! ## Design
//!
//! A document goes through three stages:
//!
//! - **Blocks**: the document is split on blank lines and each block is
//!   classified by a fixed set of ordered rules
//! - **Spans**: text inside a block is tokenized into plain, bold, italic,
//!   code, link, and image spans
//! - **Nodes**: blocks and spans become an [`HtmlNode`] tree rooted at a
//!   `<div>`, which `turnup-core` serializes to HTML
//!
//! Every stage is a pure function. Invalid markup, such as an unclosed `**`,
//! fails the whole conversion; there is no partial output.
//!
//! ## Example
//!
//! ```rust
//! use turnup::markdown_to_html;
//!
//! let html = markdown_to_html("# Hello\n\nSome **bold** text").unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>");
//! ```
//!
//! ## Example (node tree)
//!
//! ```rust
//! use turnup::{extract_title, markdown_to_html_node};
//!
//! let markdown = "# Notes\n\n- one\n- two";
//! let root = markdown_to_html_node(markdown).unwrap();
//! assert_eq!(root.tag(), Some("div"));
//! assert_eq!(root.children()[1].tag(), Some("ul"));
//! assert_eq!(extract_title(markdown).as_deref(), Some("Notes"));
//! ```

pub mod block;
mod convert;
pub mod inline;
mod span;
mod utilities;

pub use block::{block_to_block_type, markdown_to_blocks, BlockType};
pub use convert::{block_to_html_node, markdown_to_html, markdown_to_html_node, text_to_children};
pub use inline::{extract_markdown_images, extract_markdown_links, text_to_spans};
pub use span::{SpanKind, TextSpan};
pub use utilities::*;

// Re-export the node model from core
pub use turnup_core::{HtmlNode, LeafNode, NodeError, ParentNode};

/// Error type for turnup operations
#[derive(Debug, thiserror::Error)]
pub enum TurnupError {
    /// An inline delimiter was opened but never closed
    #[error("Malformed markup: unclosed delimiter `{delimiter}`")]
    MalformedMarkup { delimiter: String },

    /// A block failed the checks for its type
    #[error("Invalid block: {0}")]
    InvalidBlock(String),

    /// The node tree could not be rendered
    #[error("Render error: {0}")]
    Render(#[from] NodeError),
}

impl TurnupError {
    pub(crate) fn invalid_block(message: impl Into<String>) -> Self {
        TurnupError::InvalidBlock(message.into())
    }

    /// Check if this error comes from unbalanced inline markup
    pub fn is_malformed_markup(&self) -> bool {
        matches!(self, TurnupError::MalformedMarkup { .. })
    }

    /// Check if this error comes from an invalid block or node tree
    pub fn is_structural(&self) -> bool {
        matches!(self, TurnupError::InvalidBlock(_) | TurnupError::Render(_))
    }
}

pub type Result<T> = std::result::Result<T, TurnupError>;
