// Block segmentation and classification.
//
// A document is split into blocks on blank lines; each block is then
// assigned a kind by pattern inspection of its lines. Classification is
// pure and ordered — the first matching rule wins.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6} ").expect("hardcoded regex is valid"));

/// Kind of one block-level chunk of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading,
    CodeFence,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into block strings on blank-line boundaries.
///
/// Literal 4-space runs are removed wherever they appear in a block — a
/// blanket removal, not a dedent — then each block is trimmed. Blocks that
/// trim to empty are discarded; document order is preserved.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    markdown
        .split("\n\n")
        .map(|block| block.replace("    ", "").trim().to_string())
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block by inspecting its lines. First match wins:
/// heading, code fence, quote, unordered list, ordered list, paragraph.
pub fn block_to_block_type(block: &str) -> BlockKind {
    if HEADING_RE.is_match(block) {
        return BlockKind::Heading;
    }
    if block.starts_with("```") && block.ends_with("```") {
        return BlockKind::CodeFence;
    }
    let lines: Vec<&str> = block.split('\n').collect();
    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }
    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }
    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}
