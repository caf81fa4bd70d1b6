//! # Block Parsing
//!
//! Three-phase block parsing over a reply's raw text.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the text is split into block candidates on
//!    blank lines, recovering missing breaks before call-out lines
//!
//! 2. **Line Classification** (`classify`): each line of a candidate gets a
//!    `LineRole` (blank, unordered item, ordered item, prose) and the content
//!    to format
//!
//! 3. **Assembly** (`builder`): a `BlockBuilder` emits list or paragraph
//!    `Block`s, running every line through the inline formatter
//!
//! ## Modules
//!
//! - **`types`**: Output types (`Block`, `ParagraphLine`, `BlockKind`)
//! - **`kinds`**: Line-level syntax knowledge (`ListItem` markers, `Callout`)
//! - **`segment`**: `BlockSegmenter` and line ending normalization
//! - **`classify`**: `MarkdownLineClassifier` produces `ClassifiedLine`s
//! - **`builder`**: `BlockBuilder` and `assemble`
//!
//! ## Key Invariants
//!
//! - No nesting: a list block is flat and item numbers are not preserved
//! - The list/paragraph decision is made per block, not per line
//! - Classification never fails; unknown lines are prose

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use builder::{BlockBuilder, assemble};
pub use classify::{ClassifiedBlock, ClassifiedLine, LineRole, MarkdownLineClassifier};
pub use segment::BlockSegmenter;
pub use types::{Block, BlockKind, ParagraphLine};
