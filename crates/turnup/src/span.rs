//! Inline text spans
//!
//! A span is one run of inline content with a single kind. Spans are produced
//! by the tokenizer in [`crate::inline`] and turned into leaf nodes here.

use turnup_core::HtmlNode;

/// The kind of an inline span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Check if spans of this kind carry a target URL
    pub fn has_target(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

/// A run of inline content.
///
/// `target` is set exactly when the kind is [`SpanKind::Link`] or
/// [`SpanKind::Image`]; the constructors are the only way to build a span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    content: String,
    kind: SpanKind,
    target: Option<String>,
}

impl TextSpan {
    pub fn plain(content: &str) -> Self {
        Self::untargeted(content, SpanKind::Plain)
    }

    pub fn bold(content: &str) -> Self {
        Self::untargeted(content, SpanKind::Bold)
    }

    pub fn italic(content: &str) -> Self {
        Self::untargeted(content, SpanKind::Italic)
    }

    pub fn code(content: &str) -> Self {
        Self::untargeted(content, SpanKind::Code)
    }

    /// Create a link span with its text and destination
    pub fn link(content: &str, url: &str) -> Self {
        Self {
            content: content.to_string(),
            kind: SpanKind::Link,
            target: Some(url.to_string()),
        }
    }

    /// Create an image span with its alt text and source
    pub fn image(alt: &str, url: &str) -> Self {
        Self {
            content: alt.to_string(),
            kind: SpanKind::Image,
            target: Some(url.to_string()),
        }
    }

    // Only reachable through the constructors above
    fn untargeted(content: &str, kind: SpanKind) -> Self {
        Self {
            content: content.to_string(),
            kind,
            target: None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Convert this span to a leaf node
    pub fn to_html_node(&self) -> HtmlNode {
        let target = self.target.as_deref().unwrap_or_default();
        match self.kind {
            SpanKind::Plain => HtmlNode::text(&self.content),
            SpanKind::Bold => HtmlNode::leaf("b", &self.content),
            SpanKind::Italic => HtmlNode::leaf("i", &self.content),
            SpanKind::Code => HtmlNode::leaf("code", &self.content),
            SpanKind::Link => HtmlNode::leaf("a", &self.content).with_attr("href", target),
            SpanKind::Image => HtmlNode::void("img")
                .with_attr("src", target)
                .with_attr("alt", &self.content),
        }
    }
}
