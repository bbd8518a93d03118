// Block → HTML node handlers.
//
// One handler per block kind. Each takes the block's raw text and returns
// the block-level node, with inline children resolved through the inline
// pipeline. Handlers only produce tree nodes — serialization happens in
// html::HtmlNode::to_html.

use std::collections::BTreeMap;

use crate::block::{self, BlockKind};
use crate::error::MarkdownToHtmlError;
use crate::html::HtmlNode;
use crate::inline::{self, InlineSpan, SpanStyle};

/// Convert a Markdown document into an HTML node tree: a root `<div>`
/// container holding one child per block, in document order.
pub fn markdown_to_tree(markdown: &str) -> Result<HtmlNode, MarkdownToHtmlError> {
    let mut children = Vec::new();
    for block in block::markdown_to_blocks(markdown) {
        let kind = block::block_to_block_type(&block);
        #[cfg(feature = "tracing")]
        tracing::debug!(?kind, len = block.len(), "building block");
        children.push(block_to_node(&block, kind)?);
    }
    Ok(HtmlNode::container("div", children))
}

fn block_to_node(block: &str, kind: BlockKind) -> Result<HtmlNode, MarkdownToHtmlError> {
    match kind {
        BlockKind::Paragraph => paragraph(block),
        BlockKind::Heading => heading(block),
        BlockKind::CodeFence => code_fence(block),
        BlockKind::Quote => quote(block),
        BlockKind::UnorderedList => unordered_list(block),
        BlockKind::OrderedList => ordered_list(block),
    }
}

/// Convert one inline span into its HTML node.
fn span_to_node(span: &InlineSpan) -> HtmlNode {
    match span.style {
        SpanStyle::Plain => HtmlNode::text(&span.text),
        SpanStyle::Bold => HtmlNode::leaf("b", &span.text),
        SpanStyle::Italic => HtmlNode::leaf("i", &span.text),
        SpanStyle::Code => HtmlNode::leaf("code", &span.text),
        SpanStyle::Link => {
            let mut attrs = BTreeMap::new();
            attrs.insert("href".to_string(), span.url.clone().unwrap_or_default());
            HtmlNode::leaf_with_attrs("a", &span.text, attrs)
        }
        SpanStyle::Image => {
            let mut attrs = BTreeMap::new();
            attrs.insert("src".to_string(), span.url.clone().unwrap_or_default());
            attrs.insert("alt".to_string(), span.text.clone());
            HtmlNode::leaf_with_attrs("img", "", attrs)
        }
    }
}

/// Run the inline pipeline over flowing text and convert each span.
fn inline_nodes(text: &str) -> Result<Vec<HtmlNode>, MarkdownToHtmlError> {
    Ok(inline::text_to_spans(text)?.iter().map(span_to_node).collect())
}

fn paragraph(block: &str) -> Result<HtmlNode, MarkdownToHtmlError> {
    let text = block.split('\n').collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::container("p", inline_nodes(&text)?))
}

fn heading(block: &str) -> Result<HtmlNode, MarkdownToHtmlError> {
    // The classifier guarantees 1–6 leading hashes followed by a space.
    let level = block.chars().take_while(|&c| c == '#').count();
    let content = block.trim_start_matches('#').trim();
    Ok(HtmlNode::container(format!("h{level}"), inline_nodes(content)?))
}

fn code_fence(block: &str) -> Result<HtmlNode, MarkdownToHtmlError> {
    // Fence lines are dropped; the interior is literal text with a trailing
    // newline, never inline-parsed.
    let lines: Vec<&str> = block.split('\n').collect();
    let interior: &[&str] = if lines.len() > 1 {
        &lines[1..lines.len() - 1]
    } else {
        &[]
    };
    let mut text = interior.join("\n");
    text.push('\n');
    Ok(HtmlNode::container(
        "pre",
        vec![HtmlNode::leaf("code", text)],
    ))
}

fn quote(block: &str) -> Result<HtmlNode, MarkdownToHtmlError> {
    let text = block
        .split('\n')
        .map(|line| line.trim_start_matches('>').trim())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(HtmlNode::container("blockquote", inline_nodes(&text)?))
}

fn unordered_list(block: &str) -> Result<HtmlNode, MarkdownToHtmlError> {
    let mut items = Vec::new();
    for line in block.split('\n') {
        let line = line.trim_start();
        let content = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
            .unwrap_or(line)
            .trim();
        if content.is_empty() {
            continue;
        }
        items.push(HtmlNode::container("li", inline_nodes(content)?));
    }
    Ok(HtmlNode::container("ul", items))
}

fn ordered_list(block: &str) -> Result<HtmlNode, MarkdownToHtmlError> {
    let mut items = Vec::new();
    for line in block.split('\n') {
        let Some((_, rest)) = line.split_once(". ") else {
            continue;
        };
        let content = rest.trim();
        if content.is_empty() {
            continue;
        }
        items.push(HtmlNode::container("li", inline_nodes(content)?));
    }
    Ok(HtmlNode::container("ol", items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_to_node_plain() {
        let node = span_to_node(&InlineSpan::plain("Hello, world!"));
        assert_eq!(node, HtmlNode::text("Hello, world!"));
        assert_eq!(node.to_html().unwrap(), "Hello, world!");
    }

    #[test]
    fn test_span_to_node_bold_italic_code() {
        assert_eq!(
            span_to_node(&InlineSpan::styled("x", SpanStyle::Bold))
                .to_html()
                .unwrap(),
            "<b>x</b>"
        );
        assert_eq!(
            span_to_node(&InlineSpan::styled("x", SpanStyle::Italic))
                .to_html()
                .unwrap(),
            "<i>x</i>"
        );
        assert_eq!(
            span_to_node(&InlineSpan::styled("x", SpanStyle::Code))
                .to_html()
                .unwrap(),
            "<code>x</code>"
        );
    }

    #[test]
    fn test_span_to_node_link() {
        let node = span_to_node(&InlineSpan::link("Click me!", "https://www.example.com"));
        assert_eq!(
            node.to_html().unwrap(),
            "<a href=\"https://www.example.com\">Click me!</a>"
        );
    }

    #[test]
    fn test_span_to_node_image_has_empty_value() {
        let node = span_to_node(&InlineSpan::image("My Cat", "https://cats.com/cat.png"));
        assert_eq!(
            node.to_html().unwrap(),
            "<img alt=\"My Cat\" src=\"https://cats.com/cat.png\"></img>"
        );
    }

    #[test]
    fn test_paragraph_joins_lines_with_spaces() {
        let node = block_to_node("line one\nline two", BlockKind::Paragraph).unwrap();
        assert_eq!(node.to_html().unwrap(), "<p>line one line two</p>");
    }

    #[test]
    fn test_heading_levels() {
        let node = block_to_node("### Heading 3", BlockKind::Heading).unwrap();
        assert_eq!(node.to_html().unwrap(), "<h3>Heading 3</h3>");
        let node = block_to_node("###### Six", BlockKind::Heading).unwrap();
        assert_eq!(node.to_html().unwrap(), "<h6>Six</h6>");
    }

    #[test]
    fn test_code_fence_interior_not_inline_parsed() {
        let node = block_to_node(
            "```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```",
            BlockKind::CodeFence,
        )
        .unwrap();
        assert_eq!(
            node.to_html().unwrap(),
            "<pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre>"
        );
    }

    #[test]
    fn test_quote_strips_markers_and_joins() {
        let node = block_to_node(
            "> This is a quote\n> spanning multiple lines",
            BlockKind::Quote,
        )
        .unwrap();
        assert_eq!(
            node.to_html().unwrap(),
            "<blockquote>This is a quote spanning multiple lines</blockquote>"
        );
    }

    #[test]
    fn test_unordered_list_accepts_star_marker() {
        let node = block_to_node("- one\n* two", BlockKind::UnorderedList).unwrap();
        assert_eq!(node.to_html().unwrap(), "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn test_unordered_list_skips_empty_items() {
        let node = block_to_node("- one\n- \n- two", BlockKind::UnorderedList).unwrap();
        assert_eq!(node.to_html().unwrap(), "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn test_ordered_list_drops_ordinal_markers() {
        let node = block_to_node("1. First\n2. Second", BlockKind::OrderedList).unwrap();
        assert_eq!(
            node.to_html().unwrap(),
            "<ol><li>First</li><li>Second</li></ol>"
        );
    }

    #[test]
    fn test_ordered_list_skips_blank_remainders() {
        let node = block_to_node("1. First\n2. ", BlockKind::OrderedList).unwrap();
        assert_eq!(node.to_html().unwrap(), "<ol><li>First</li></ol>");
    }

    #[test]
    fn test_markdown_to_tree_root_is_div() {
        let tree = markdown_to_tree("# Title\n\nBody").unwrap();
        assert_eq!(
            tree.to_html().unwrap(),
            "<div><h1>Title</h1><p>Body</p></div>"
        );
    }

    #[test]
    fn test_markdown_to_tree_empty_document() {
        let tree = markdown_to_tree("").unwrap();
        assert_eq!(tree.to_html().unwrap(), "<div></div>");
    }

    #[test]
    fn test_markdown_to_tree_propagates_inline_errors() {
        assert!(matches!(
            markdown_to_tree("an **unterminated bold"),
            Err(MarkdownToHtmlError::Syntax(_))
        ));
    }
}
