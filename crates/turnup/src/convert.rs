//! Convert Markdown blocks to an HTML node tree
//!
//! Each block is classified and then built by the matching `*_to_html_node`
//! function. Inline text goes through the tokenizer; code blocks do not.

use tracing::debug;
use turnup_core::HtmlNode;

use crate::block::{block_to_block_type, markdown_to_blocks, BlockType, FENCE};
use crate::inline::text_to_spans;
use crate::span::TextSpan;
use crate::{Result, TurnupError};

/// Convert a Markdown document to a node tree rooted at a `<div>`
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let children = markdown_to_blocks(markdown)
        .into_iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("div", children))
}

/// Convert a Markdown document straight to an HTML string
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    let node = markdown_to_html_node(markdown)?;
    Ok(node.to_html()?)
}

/// Convert a single block to its node subtree
pub fn block_to_html_node(block: &str) -> Result<HtmlNode> {
    let block_type = block_to_block_type(block);
    debug!(?block_type, len = block.len(), "converting block");

    match block_type {
        BlockType::Paragraph => paragraph_to_html_node(block),
        BlockType::Heading(level) => heading_to_html_node(block, level),
        BlockType::Code => code_to_html_node(block),
        BlockType::Quote => quote_to_html_node(block),
        BlockType::UnorderedList => ulist_to_html_node(block),
        BlockType::OrderedList => olist_to_html_node(block),
    }
}

/// Tokenize inline text and map each span to a leaf node
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    let spans = text_to_spans(text)?;
    Ok(spans.iter().map(TextSpan::to_html_node).collect())
}

fn paragraph_to_html_node(block: &str) -> Result<HtmlNode> {
    let paragraph = block.split('\n').collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", text_to_children(&paragraph)?))
}

fn heading_to_html_node(block: &str, level: u8) -> Result<HtmlNode> {
    // Skip the `#` run and the single space after it
    let text = block
        .get(usize::from(level) + 1..)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| TurnupError::invalid_block(format!("invalid heading level: {level}")))?;

    Ok(HtmlNode::parent(
        &format!("h{level}"),
        text_to_children(text)?,
    ))
}

fn code_to_html_node(block: &str) -> Result<HtmlNode> {
    let inner = block
        .strip_prefix(FENCE)
        .and_then(|rest| rest.strip_suffix(FENCE))
        .ok_or_else(|| TurnupError::invalid_block("invalid code block"))?;
    let text = inner.strip_prefix('\n').unwrap_or(inner);

    // Code is raw text, never tokenized
    let code = HtmlNode::parent("code", vec![TextSpan::plain(text).to_html_node()]);
    Ok(HtmlNode::parent("pre", vec![code]))
}

fn quote_to_html_node(block: &str) -> Result<HtmlNode> {
    let lines = block
        .split('\n')
        .map(|line| {
            if !line.starts_with('>') {
                return Err(TurnupError::invalid_block("invalid quote block"));
            }
            Ok(line.trim_start_matches('>').trim())
        })
        .collect::<Result<Vec<_>>>()?;

    let content = lines.join(" ");
    Ok(HtmlNode::parent("blockquote", text_to_children(&content)?))
}

fn ulist_to_html_node(block: &str) -> Result<HtmlNode> {
    let items = block
        .split('\n')
        .map(|item| -> Result<HtmlNode> {
            let text = item
                .strip_prefix("- ")
                .ok_or_else(|| TurnupError::invalid_block("invalid list item"))?;
            Ok(HtmlNode::parent("li", text_to_children(text)?))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("ul", items))
}

fn olist_to_html_node(block: &str) -> Result<HtmlNode> {
    let items = block
        .split('\n')
        .map(|item| -> Result<HtmlNode> {
            let (_, text) = item
                .split_once(". ")
                .ok_or_else(|| TurnupError::invalid_block("invalid list item"))?;
            Ok(HtmlNode::parent("li", text_to_children(text)?))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("ol", items))
}
