//! # Snapshot Testing Support
//!
//! Utilities for testing the renderer via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a rendered `Document` to a stable text outline
//!   for `insta` snapshot testing (also used by the CLI's `--tree` output)
//! - **`invariants`**: Runtime checks for renderer correctness (non-empty
//!   blocks, well-formed inline nodes, lossless inline re-segmentation)
//!
//! ## Testing Strategy
//!
//! Rendering behaviour is pinned by fixture snapshots rather than a formal
//! grammar. Every snapshot test also runs the invariant checks.

pub mod invariants;
pub mod normalize;

pub use invariants::{check as invariants, check_lossless};
pub use normalize::normalize;
