use crate::parsing::{
    Document,
    blocks::{Block, ParagraphLine},
    inline::{
        InlineContent, InlineNode,
        kinds::{Bold, CodeSpan},
    },
};

/// Validates renderer output invariants.
///
/// Asserts that:
/// - Every list has at least one item
/// - Every paragraph has at least one text line
/// - Inline content is never empty, and no two text nodes are adjacent
/// - A text node is empty only when it is the sole node of its line
/// - Bold and code values are non-empty and free of their own delimiter
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for (bi, block) in doc.blocks.iter().enumerate() {
        match block {
            Block::List { items } => {
                assert!(!items.is_empty(), "block {bi}: list without items");
                for item in items {
                    check_inline(bi, item);
                }
            }
            Block::Paragraph { lines } => {
                assert!(
                    lines.iter().any(|l| matches!(l, ParagraphLine::Text(_))),
                    "block {bi}: paragraph without text lines: {lines:?}"
                );
                for line in lines {
                    if let ParagraphLine::Text(content) = line {
                        check_inline(bi, content);
                    }
                }
            }
        }
    }
}

/// Asserts that `content` re-serializes to exactly `line`.
///
/// # Panics
/// Panics if formatting lost, duplicated or altered any character.
pub fn check_lossless(line: &str, content: &InlineContent) {
    let rebuilt = content.to_markdown();
    assert_eq!(
        rebuilt, line,
        "inline content does not reproduce its line: {content:?}"
    );
}

fn check_inline(bi: usize, content: &InlineContent) {
    assert!(!content.is_empty(), "block {bi}: empty inline content");

    for pair in content.nodes().windows(2) {
        assert!(
            !matches!(pair, [InlineNode::Text(_), InlineNode::Text(_)]),
            "block {bi}: adjacent text nodes: {pair:?}"
        );
    }

    for node in content {
        match node {
            InlineNode::Text(v) => assert!(
                !v.is_empty() || content.len() == 1,
                "block {bi}: empty text node among others: {content:?}"
            ),
            InlineNode::Bold(v) => assert!(
                !v.is_empty() && !v.bytes().any(|b| b == Bold::STAR),
                "block {bi}: malformed bold value {v:?}"
            ),
            InlineNode::Code(v) => assert!(
                !v.is_empty() && !v.bytes().any(|b| b == CodeSpan::TICK),
                "block {bi}: malformed code value {v:?}"
            ),
        }
    }
}
