use crate::parsing::text::{LineRef, Span, lines_with_spans};

use super::{kinds::ListItem, types::BlockKind};

/// The role a single line plays inside its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// Empty or whitespace only.
    Blank,
    /// Starts with `- ` or `• `.
    UnorderedItem,
    /// Starts with a number followed by `.` or `)` and whitespace.
    OrderedItem,
    /// Anything else.
    Prose,
}

impl LineRole {
    pub fn is_item(self) -> bool {
        matches!(self, LineRole::UnorderedItem | LineRole::OrderedItem)
    }
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone)]
pub struct ClassifiedLine<'a> {
    /// Byte span of this line in its block.
    pub span: Span,
    /// The untrimmed line text.
    pub raw: &'a str,
    pub role: LineRole,
    /// Text to format: the trimmed line with any list marker removed.
    pub content: &'a str,
}

/// All lines of one block candidate, in order.
#[derive(Debug, Clone)]
pub struct ClassifiedBlock<'a> {
    pub lines: Vec<ClassifiedLine<'a>>,
}

impl ClassifiedBlock<'_> {
    /// A block is a list as soon as one line is an item; the decision is
    /// per block, so prose lines of a list block are not downgraded.
    pub fn kind(&self) -> BlockKind {
        if self.lines.iter().any(|l| l.role.is_item()) {
            BlockKind::List
        } else {
            BlockKind::Paragraph
        }
    }
}

/// Classifies lines for the block assembly phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies one line. Rules are checked against the trimmed text, in
    /// order: blank, unordered item, ordered item, prose.
    pub fn classify_line<'a>(&self, lr: &LineRef<'a>) -> ClassifiedLine<'a> {
        let trimmed = lr.text.trim();

        let (role, content) = if trimmed.is_empty() {
            (LineRole::Blank, trimmed)
        } else if let Some(rest) = ListItem::strip_unordered(trimmed) {
            (LineRole::UnorderedItem, rest)
        } else if let Some(rest) = ListItem::strip_ordered(trimmed) {
            (LineRole::OrderedItem, rest)
        } else {
            (LineRole::Prose, trimmed)
        };

        ClassifiedLine {
            span: lr.span,
            raw: lr.text,
            role,
            content,
        }
    }

    /// Classifies every line of a block candidate.
    pub fn classify<'a>(&self, block: &'a str) -> ClassifiedBlock<'a> {
        ClassifiedBlock {
            lines: lines_with_spans(block)
                .map(|lr| self.classify_line(&lr))
                .collect(),
        }
    }
}
