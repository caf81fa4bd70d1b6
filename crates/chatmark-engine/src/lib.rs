pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    Document, Renderer,
    blocks::{Block, ParagraphLine},
    inline::{InlineContent, InlineNode, format_inline},
    options::RenderOptions,
    render, snapshot,
};
