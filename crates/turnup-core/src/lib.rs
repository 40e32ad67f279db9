//! turnup-core - HTML node tree and serialization
//!
//! This crate provides the node model that `turnup` builds from Markdown and
//! the serializer that renders it back out as an HTML string.
//!
//! # Architecture
//!
//! ```text
//!                      ┌───────────────┐
//! Markdown ──turnup──▶ │ HtmlNode tree │ ──to_html──▶ HTML String
//!                      └───────────────┘
//! ```
//!
//! Nodes are plain data: building a tree never fails. The structural rules
//! (a parent needs a tag and a child list, a non-void leaf needs a value) are
//! enforced when the tree is rendered.
//!
//! # Example
//!
//! ```rust
//! use turnup_core::HtmlNode;
//!
//! let node = HtmlNode::parent(
//!     "p",
//!     vec![
//!         HtmlNode::text("This is "),
//!         HtmlNode::leaf("b", "bold"),
//!         HtmlNode::text(" and a "),
//!         HtmlNode::leaf("a", "link").with_attr("href", "https://example.com"),
//!     ],
//! );
//!
//! assert_eq!(
//!     node.to_html().unwrap(),
//!     r#"<p>This is <b>bold</b> and a <a href="https://example.com">link</a></p>"#
//! );
//! ```

mod node;
mod serialize;

pub use node::{is_void, Attributes, HtmlNode, LeafNode, ParentNode, VOID_TAGS};
pub use serialize::{props_to_html, to_html};

/// Error raised when a node tree violates a rendering invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("leaf requires a value (tag: {})", tag_name(.tag))]
    LeafWithoutValue { tag: Option<String> },

    #[error("parent requires a tag")]
    ParentWithoutTag,

    #[error("parent requires children (tag: {tag})")]
    ParentWithoutChildren { tag: String },
}

pub type Result<T> = std::result::Result<T, NodeError>;

fn tag_name(tag: &Option<String>) -> &str {
    tag.as_deref().unwrap_or("none")
}
