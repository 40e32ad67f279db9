//! HTML node tree
//!
//! A node is either a leaf, holding a literal value and no children, or a
//! parent, holding an ordered list of children and no value. Both variants
//! own their data outright; there are no back-references.

use indexmap::IndexMap;

use crate::serialize;
use crate::Result;

/// Attributes in insertion order
pub type Attributes = IndexMap<String, String>;

/// Elements rendered without content or a closing tag
pub const VOID_TAGS: &[&str] = &["img", "br", "hr"];

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// A node in the HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text or a single element with literal content
    Leaf(LeafNode),

    /// Element wrapping other nodes
    Parent(ParentNode),
}

/// A node holding a literal value.
///
/// With no tag the value is emitted verbatim. Void tags ignore the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

/// A node wrapping an ordered list of children.
///
/// Attributes are kept on the node but are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    pub attributes: Attributes,
}

impl LeafNode {
    pub fn new(tag: Option<&str>, value: Option<&str>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: value.map(str::to_string),
            attributes: Attributes::new(),
        }
    }

    /// Render this leaf to HTML
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        serialize::write_leaf(self, &mut out)?;
        Ok(out)
    }
}

impl ParentNode {
    pub fn new(tag: Option<&str>, children: Option<Vec<HtmlNode>>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Render this parent and all of its descendants to HTML
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        serialize::write_parent(self, &mut out)?;
        Ok(out)
    }
}

impl HtmlNode {
    /// Create a leaf element with content, e.g. `<b>value</b>`
    pub fn leaf(tag: &str, value: &str) -> Self {
        HtmlNode::Leaf(LeafNode::new(Some(tag), Some(value)))
    }

    /// Create an untagged leaf rendered as raw text
    pub fn text(value: &str) -> Self {
        HtmlNode::Leaf(LeafNode::new(None, Some(value)))
    }

    /// Create a leaf for a void element, e.g. `<img>`
    pub fn void(tag: &str) -> Self {
        HtmlNode::Leaf(LeafNode::new(Some(tag), None))
    }

    /// Create a parent element
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent(ParentNode::new(Some(tag), Some(children)))
    }

    /// Set an attribute, keeping the position of an existing key
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes_mut()
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Get the tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    /// Get the literal value of a leaf
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.value.as_deref(),
            HtmlNode::Parent(_) => None,
        }
    }

    /// Get all child nodes.
    ///
    /// Empty for a leaf, and also for a parent whose child list is absent;
    /// use [`HtmlNode::child_list`] to tell the two apart.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => parent.children.as_deref().unwrap_or(&[]),
        }
    }

    /// Get the child list of a parent, `None` for a leaf or an absent list
    pub fn child_list(&self) -> Option<&[HtmlNode]> {
        match self {
            HtmlNode::Leaf(_) => None,
            HtmlNode::Parent(parent) => parent.children.as_deref(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attributes,
            HtmlNode::Parent(parent) => &parent.attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &mut leaf.attributes,
            HtmlNode::Parent(parent) => &mut parent.attributes,
        }
    }

    /// Render this node and all of its descendants to HTML
    pub fn to_html(&self) -> Result<String> {
        serialize::to_html(self)
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_leaf() {
        let node = HtmlNode::leaf("b", "bold");
        assert_eq!(node.tag(), Some("b"));
        assert_eq!(node.value(), Some("bold"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_create_text() {
        let node = HtmlNode::text("Hello World");
        assert_eq!(node.tag(), None);
        assert_eq!(node.value(), Some("Hello World"));
    }

    #[test]
    fn test_create_parent() {
        let node = HtmlNode::parent(
            "ul",
            vec![
                HtmlNode::parent("li", vec![HtmlNode::text("one")]),
                HtmlNode::parent("li", vec![HtmlNode::text("two")]),
            ],
        );
        assert_eq!(node.tag(), Some("ul"));
        assert_eq!(node.value(), None);
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.children()[1].children()[0].value(), Some("two"));
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let node = HtmlNode::void("img")
            .with_attr("src", "cat.png")
            .with_attr("alt", "A cat")
            .with_attr("src", "dog.png");

        let keys: Vec<&str> = node.attributes().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["src", "alt"]);
        assert_eq!(node.attr("src"), Some("dog.png"));
        assert_eq!(node.attr("title"), None);
    }

    #[test]
    fn test_is_void() {
        assert!(is_void("img"));
        assert!(is_void("br"));
        assert!(is_void("hr"));
        assert!(!is_void("p"));
        assert!(!is_void("input"));
    }

    #[test]
    fn test_from_variants() {
        let leaf: HtmlNode = LeafNode::new(Some("i"), Some("x")).into();
        assert!(matches!(leaf, HtmlNode::Leaf(_)));

        let parent: HtmlNode = ParentNode::new(Some("p"), None).into();
        assert!(matches!(parent, HtmlNode::Parent(_)));
        assert!(parent.children().is_empty());
    }

    #[test]
    fn test_absent_and_empty_children_differ() {
        let absent: HtmlNode = ParentNode::new(Some("ul"), None).into();
        let empty = HtmlNode::parent("ul", Vec::new());

        assert!(absent.children().is_empty());
        assert!(empty.children().is_empty());
        assert_eq!(absent.child_list(), None);
        assert_eq!(empty.child_list(), Some(&[][..]));
        assert_eq!(HtmlNode::text("x").child_list(), None);

        assert!(absent.to_html().is_err());
        assert_eq!(empty.to_html().unwrap(), "<ul></ul>");
    }
}
