//! HTML serialization
//!
//! Renders a node tree into an HTML string. Output is written into a single
//! buffer; an invalid node anywhere in the tree aborts the whole render.

use crate::node::{is_void, Attributes, HtmlNode, LeafNode, ParentNode};
use crate::{NodeError, Result};

/// Render a node and all of its descendants to HTML
pub fn to_html(node: &HtmlNode) -> Result<String> {
    let mut output = String::with_capacity(256);
    write_node(node, &mut output)?;
    Ok(output)
}

/// Render attributes as ` key="value"` pairs in insertion order
pub fn props_to_html(attributes: &Attributes) -> String {
    let mut out = String::new();
    write_props(attributes, &mut out);
    out
}

fn write_props(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

fn write_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf(leaf) => write_leaf(leaf, out),
        HtmlNode::Parent(parent) => write_parent(parent, out),
    }
}

pub(crate) fn write_leaf(leaf: &LeafNode, out: &mut String) -> Result<()> {
    if let Some(tag) = leaf.tag.as_deref().filter(|tag| is_void(tag)) {
        out.push('<');
        out.push_str(tag);
        write_props(&leaf.attributes, out);
        out.push('>');
        return Ok(());
    }

    let Some(value) = leaf.value.as_deref() else {
        return Err(NodeError::LeafWithoutValue {
            tag: leaf.tag.clone(),
        });
    };

    match leaf.tag.as_deref() {
        None => out.push_str(value),
        Some(tag) => {
            out.push('<');
            out.push_str(tag);
            write_props(&leaf.attributes, out);
            out.push('>');
            out.push_str(value);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
    Ok(())
}

pub(crate) fn write_parent(parent: &ParentNode, out: &mut String) -> Result<()> {
    let Some(tag) = parent.tag.as_deref() else {
        return Err(NodeError::ParentWithoutTag);
    };
    let Some(children) = parent.children.as_deref() else {
        return Err(NodeError::ParentWithoutChildren {
            tag: tag.to_string(),
        });
    };

    // Parent attributes are stored but never emitted
    out.push('<');
    out.push_str(tag);
    out.push('>');
    for child in children {
        write_node(child, out)?;
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    Ok(())
}
