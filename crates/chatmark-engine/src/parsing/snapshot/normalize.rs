use std::fmt::Write;

use crate::parsing::{
    Document,
    blocks::{Block, ParagraphLine},
    inline::{InlineContent, InlineNode},
};

/// Converts a rendered document into a stable, indented outline.
///
/// One header line per block (`paragraph` or `list`), then one indented line
/// per paragraph line, break or list item. Node values are quoted with Rust
/// string escaping so whitespace at the edges stays visible:
///
/// ```text
/// paragraph
///   line: bold("Example:") text(" Der Mann")
///   break
/// list
///   item: text("Use der for masculine")
/// ```
pub fn normalize(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        match block {
            Block::Paragraph { lines } => {
                out.push_str("paragraph\n");
                for line in lines {
                    match line {
                        ParagraphLine::Text(content) => {
                            out.push_str("  line: ");
                            write_inline(&mut out, content);
                        }
                        ParagraphLine::Break => out.push_str("  break"),
                    }
                    out.push('\n');
                }
            }
            Block::List { items } => {
                out.push_str("list\n");
                for item in items {
                    out.push_str("  item: ");
                    write_inline(&mut out, item);
                    out.push('\n');
                }
            }
        }
    }
    out
}

fn write_inline(out: &mut String, content: &InlineContent) {
    for (i, node) in content.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let tag = match node {
            InlineNode::Text(_) => "text",
            InlineNode::Bold(_) => "bold",
            InlineNode::Code(_) => "code",
        };
        // Writing to a String cannot fail.
        let _ = write!(out, "{tag}({:?})", node.value());
    }
}
