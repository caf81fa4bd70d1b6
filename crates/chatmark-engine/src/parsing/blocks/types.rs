use serde::Serialize;

use crate::parsing::inline::InlineContent;

/// Whether a classified block renders as a list or a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    List,
    Paragraph,
}

/// One line of a paragraph block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum ParagraphLine {
    /// A formatted line of prose.
    Text(InlineContent),
    /// A hard line break from a blank line inside the block.
    Break,
}

/// A top-level unit of the rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    /// List items in order. Ordered and unordered items are not
    /// distinguished; numbering is derived from position by the display layer.
    List { items: Vec<InlineContent> },
    /// Prose lines and hard breaks in order.
    Paragraph { lines: Vec<ParagraphLine> },
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::List { .. } => BlockKind::List,
            Block::Paragraph { .. } => BlockKind::Paragraph,
        }
    }
}
