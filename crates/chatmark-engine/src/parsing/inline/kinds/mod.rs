//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIM = b"**"`, inner text excludes `STAR`
//! - **`CodeSpan`**: `TICK = b'\`'`, inner text excludes `TICK`
//!
//! The scanners read these constants; they never hardcode `**` or `` ` ``.

pub mod bold;
pub mod code_span;

pub use bold::Bold;
pub use code_span::CodeSpan;
