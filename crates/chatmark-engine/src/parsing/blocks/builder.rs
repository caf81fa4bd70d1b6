use crate::parsing::inline::format_inline;

use super::{
    classify::{ClassifiedBlock, ClassifiedLine, LineRole},
    types::{Block, BlockKind, ParagraphLine},
};

/// Turns classified block candidates into rendered [`Block`]s.
///
/// A paragraph candidate keeps one [`ParagraphLine::Text`] per non-blank line
/// and a [`ParagraphLine::Break`] per blank line. A list candidate yields one
/// item per non-blank line, except that prose lines before its first item are
/// split off into a paragraph of their own (an intro such as
/// `Here are the rules:` directly above the list).
pub struct BlockBuilder {
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self { out: vec![] }
    }

    pub fn push(&mut self, block: &ClassifiedBlock<'_>) {
        match block.kind() {
            BlockKind::Paragraph => self.push_paragraph(&block.lines),
            BlockKind::List => {
                let first_item = block
                    .lines
                    .iter()
                    .position(|l| l.role.is_item())
                    .unwrap_or(0);
                let (intro, items) = block.lines.split_at(first_item);
                self.push_paragraph(intro);
                self.push_list(items);
            }
        }
    }

    pub fn finish(self) -> Vec<Block> {
        self.out
    }

    fn push_paragraph(&mut self, lines: &[ClassifiedLine<'_>]) {
        if lines.iter().all(|l| l.role == LineRole::Blank) {
            return;
        }
        let lines = lines
            .iter()
            .map(|l| match l.role {
                LineRole::Blank => ParagraphLine::Break,
                _ => ParagraphLine::Text(format_inline(l.content)),
            })
            .collect();
        self.out.push(Block::Paragraph { lines });
    }

    fn push_list(&mut self, lines: &[ClassifiedLine<'_>]) {
        let items: Vec<_> = lines
            .iter()
            .filter(|l| l.role != LineRole::Blank)
            .map(|l| format_inline(l.content))
            .collect();
        if !items.is_empty() {
            self.out.push(Block::List { items });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Assembles all classified blocks, in order.
pub fn assemble(blocks: &[ClassifiedBlock<'_>]) -> Vec<Block> {
    let mut builder = BlockBuilder::new();
    for block in blocks {
        builder.push(block);
    }
    builder.finish()
}
