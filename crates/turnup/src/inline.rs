//! Inline tokenizer
//!
//! Turns a run of text into [`TextSpan`]s. Tokenizing is a fixed pipeline of
//! passes, each taking the previous span list and re-splitting only its plain
//! spans:
//!
//! 1. code spans (`` ` ``)
//! 2. bold (`**`)
//! 3. italic (`_`)
//! 4. images (`![alt](url)`)
//! 5. links (`[text](url)`)
//!
//! Delimiters are matched by splitting, not nesting: text split on a
//! delimiter must produce an odd number of sections, and every odd section
//! becomes a styled span. Link and image labels are only scanned after the
//! delimiter passes, so their text is taken as is.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::span::TextSpan;
use crate::{Result, TurnupError};

/// `![alt](url)`
static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// `[text](url)`; callers reject matches directly after a `!`
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// A link or image found in a string, with byte offsets of the whole match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PatternMatch<'a> {
    start: usize,
    end: usize,
    label: &'a str,
    url: &'a str,
}

/// Tokenize a run of text into spans, in source order
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimiter(spans, "`", TextSpan::code)?;
    let spans = split_delimiter(spans, "**", TextSpan::bold)?;
    let spans = split_delimiter(spans, "_", TextSpan::italic)?;
    let spans = split_images(spans);
    let spans = split_links(spans);

    trace!(spans = spans.len(), "tokenized inline text");
    Ok(spans)
}

/// Split plain spans on a paired delimiter.
///
/// Sections at odd positions are built with `build`, e.g. [`TextSpan::bold`];
/// empty sections are dropped. An odd number of delimiters in any plain span
/// is an error.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    build: fn(&str) -> TextSpan,
) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let sections: Vec<&str> = span.content().split(delimiter).collect();
        if sections.len() % 2 == 0 {
            return Err(TurnupError::MalformedMarkup {
                delimiter: delimiter.to_string(),
            });
        }

        for (i, section) in sections.into_iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                result.push(TextSpan::plain(section));
            } else {
                result.push(build(section));
            }
        }
    }

    Ok(result)
}

/// Split `![alt](url)` images out of plain spans
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, find_images, TextSpan::image)
}

/// Split `[text](url)` links out of plain spans
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, find_links, TextSpan::link)
}

/// Extract `(alt, url)` pairs for every image in `text`
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    to_pairs(find_images(text))
}

/// Extract `(text, url)` pairs for every link in `text`, skipping images
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    to_pairs(find_links(text))
}

fn to_pairs(matches: Vec<PatternMatch<'_>>) -> Vec<(String, String)> {
    matches
        .into_iter()
        .map(|m| (m.label.to_string(), m.url.to_string()))
        .collect()
}

fn split_matches(
    spans: Vec<TextSpan>,
    find: fn(&str) -> Vec<PatternMatch<'_>>,
    build: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let text = span.content();
        let matches = find(text);
        if matches.is_empty() {
            result.push(span);
            continue;
        }

        let mut cursor = 0;
        for m in matches {
            let before = &text[cursor..m.start];
            if !before.is_empty() {
                result.push(TextSpan::plain(before));
            }
            result.push(build(m.label, m.url));
            cursor = m.end;
        }

        let rest = &text[cursor..];
        if !rest.is_empty() {
            result.push(TextSpan::plain(rest));
        }
    }

    result
}

fn find_images(text: &str) -> Vec<PatternMatch<'_>> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| pattern_match(&caps))
        .collect()
}

fn find_links(text: &str) -> Vec<PatternMatch<'_>> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while let Some(caps) = LINK_RE.captures_at(text, pos) {
        let Some(m) = pattern_match(&caps) else {
            break;
        };

        // `![..](..)` is image syntax, retry from just past the `[`
        if text[..m.start].ends_with('!') {
            pos = m.start + 1;
            continue;
        }

        pos = m.end;
        matches.push(m);
    }

    matches
}

fn pattern_match<'a>(caps: &regex::Captures<'a>) -> Option<PatternMatch<'a>> {
    let whole = caps.get(0)?;
    Some(PatternMatch {
        start: whole.start(),
        end: whole.end(),
        label: caps.get(1)?.as_str(),
        url: caps.get(2)?.as_str(),
    })
}
