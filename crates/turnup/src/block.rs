//! Block segmentation and classification
//!
//! A document is split into blocks on blank lines. Each block is then given
//! exactly one [`BlockType`] by checking a fixed list of rules in order; the
//! first rule that matches wins and [`BlockType::Paragraph`] is the fallback.

/// Code fence line
pub const FENCE: &str = "```";

/// Block-level Markdown types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    /// ATX heading with level (1-6)
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into trimmed, non-empty blocks
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block.
///
/// Rules, in order: code fence, quote, unordered list, ordered list,
/// heading, paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    let lines: Vec<&str> = block.split('\n').collect();

    if is_code_block(&lines) {
        return BlockType::Code;
    }
    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }
    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockType::UnorderedList;
    }
    if is_ordered_list(&lines) {
        return BlockType::OrderedList;
    }
    if let Some(level) = heading_level(lines[0]) {
        return BlockType::Heading(level);
    }

    BlockType::Paragraph
}

/// Get the ATX heading level of a line, if it is a heading.
///
/// The line needs 1 to 6 `#` characters, a space, then some text.
pub fn heading_level(line: &str) -> Option<u8> {
    let count = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&count) {
        return None;
    }

    let text = line[count..].strip_prefix(' ')?;
    if text.is_empty() {
        return None;
    }

    u8::try_from(count).ok()
}

fn is_code_block(lines: &[&str]) -> bool {
    lines.len() >= 2 && lines.first() == Some(&FENCE) && lines.last() == Some(&FENCE)
}

/// Every line `i` starts with `"{i + 1}. "`
fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}
