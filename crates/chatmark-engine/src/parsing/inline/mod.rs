//! # Inline Formatting
//!
//! Turns one line of text into plain, bold and code runs.
//!
//! ## Two phases
//!
//! 1. **Scan** (`scan`): each pattern family (`**bold**`, `` `code` ``) is
//!    scanned on its own with a byte [`cursor::Cursor`], producing spans.
//! 2. **Merge** (`parser`): the candidates are ordered by start offset and
//!    overlaps are dropped first-match-wins before nodes are emitted.
//!
//! Nested formatting is not supported: `**a `b` c**` is a single bold node
//! whose value keeps the backticks.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` (Text, Bold, Code) and `InlineContent`
//! - **`kinds`**: delimiter constants owned by `Bold` and `CodeSpan`
//! - **`cursor`**: byte cursor used by the scanners
//! - **`scan`**: per-family scanners producing `Match` candidates
//! - **`parser`**: `format_inline()` entry point and the overlap merge

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod scan;
pub mod types;

pub use parser::format_inline;
pub use types::{InlineContent, InlineNode};
