use pretty_assertions::assert_eq;
use turnup::{
    block_to_block_type, extract_title, markdown_to_blocks, markdown_to_html,
    markdown_to_html_node, BlockType, HtmlNode, NodeError, TurnupError,
};

#[test]
fn test_heading_document() {
    let html = markdown_to_html("# HEADING").unwrap();
    assert_eq!(html, "<div><h1>HEADING</h1></div>");
}

#[test]
fn test_paragraphs() {
    let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
    let html = markdown_to_html(md).unwrap();
    assert_eq!(
        html,
        "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn test_codeblock() {
    let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
    let html = markdown_to_html(md).unwrap();
    assert_eq!(
        html,
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
    );
}

#[test]
fn test_lists() {
    let md = "
- This is a list
- with items
- and _more_ items

1. This is an `ordered` list
2. with items
3. and more items
";
    let html = markdown_to_html(md).unwrap();
    assert_eq!(
        html,
        "<div><ul><li>This is a list</li><li>with items</li><li>and <i>more</i> items</li></ul><ol><li>This is an <code>ordered</code> list</li><li>with items</li><li>and more items</li></ol></div>"
    );
}

#[test]
fn test_blockquote() {
    let md = "
> This is a
> blockquote block

this is paragraph text
";
    let html = markdown_to_html(md).unwrap();
    assert_eq!(
        html,
        "<div><blockquote>This is a blockquote block</blockquote><p>this is paragraph text</p></div>"
    );
}

#[test]
fn test_links_and_images() {
    let md = "Go [home](/) or see ![the logo](/images/logo.png)![a](u1)[b](u2)";
    let html = markdown_to_html(md).unwrap();
    assert_eq!(
        html,
        r#"<div><p>Go <a href="/">home</a> or see <img src="/images/logo.png" alt="the logo"><img src="u1" alt="a"><a href="u2">b</a></p></div>"#
    );
}

#[test]
fn test_mixed_document() {
    let md = "# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Reasons I like Tolkien

- You can spend years studying the legendarium
- It's not a _movie_

1. Gandalf
2. Bilbo
3. Sam
";
    let html = markdown_to_html(md).unwrap();
    assert_eq!(
        html,
        concat!(
            "<div>",
            "<h1>Tolkien Fan Club</h1>",
            r#"<p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></p>"#,
            "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
            "<blockquote>\"I am in fact a Hobbit in all but size.\"  -- J.R.R. Tolkien</blockquote>",
            "<h2>Reasons I like Tolkien</h2>",
            "<ul><li>You can spend years studying the legendarium</li><li>It's not a <i>movie</i></li></ul>",
            "<ol><li>Gandalf</li><li>Bilbo</li><li>Sam</li></ol>",
            "</div>"
        )
    );
    assert_eq!(extract_title(md).as_deref(), Some("Tolkien Fan Club"));
}

#[test]
fn test_conversion_is_deterministic() {
    let md = "# A\n\nsome **b** and _i_\n\n- x\n- y";
    let first = markdown_to_html(md).unwrap();
    let second = markdown_to_html(md).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_segmentation_round_trip() {
    let md = "\n\n# Title\n\n\n\nbody line\nsecond line\n\n```\ncode\n```\n\n";
    let blocks = markdown_to_blocks(md);
    assert_eq!(markdown_to_blocks(&blocks.join("\n\n")), blocks);
}

#[test]
fn test_heading_boundaries() {
    for level in 1..=6u8 {
        let block = format!("{} heading", "#".repeat(usize::from(level)));
        assert_eq!(block_to_block_type(&block), BlockType::Heading(level));
    }
    assert_eq!(block_to_block_type("heading"), BlockType::Paragraph);
    assert_eq!(block_to_block_type("###heading"), BlockType::Paragraph);
}

#[test]
fn test_ordered_list_with_gap_is_paragraph() {
    let html = markdown_to_html("1. one\n3. three\n4. four").unwrap();
    assert_eq!(html, "<div><p>1. one 3. three 4. four</p></div>");
}

#[test]
fn test_odd_delimiters_fail() {
    for md in ["a ` b", "a ** b", "a _ b", "ok\n\n**bold** and **not"] {
        let err = markdown_to_html(md).unwrap_err();
        assert!(err.is_malformed_markup(), "expected malformed markup for {md:?}");
    }
}

#[test]
fn test_render_error_converts() {
    let broken = HtmlNode::parent("div", vec![HtmlNode::void("img"), HtmlNode::Leaf(Default::default())]);
    let err: TurnupError = broken.to_html().unwrap_err().into();
    assert!(err.is_structural());
    assert!(matches!(
        err,
        TurnupError::Render(NodeError::LeafWithoutValue { tag: None })
    ));
}

#[test]
fn test_node_tree_shape() {
    let root = markdown_to_html_node("```\nx\n```").unwrap();
    let pre = &root.children()[0];
    assert_eq!(pre.tag(), Some("pre"));
    let code = &pre.children()[0];
    assert_eq!(code.tag(), Some("code"));
    assert_eq!(code.children()[0].tag(), None);
    assert_eq!(code.children()[0].value(), Some("x\n"));
}
