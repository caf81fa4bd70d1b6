use std::sync::OnceLock;

use regex::Regex;

/// List item line type with owned marker knowledge.
///
/// Only a single list level exists; indentation is trimmed away before the
/// markers are checked.
pub struct ListItem;

impl ListItem {
    /// Unordered item prefixes: a dash or a bullet glyph, then one space.
    pub const UNORDERED: [&'static str; 2] = ["- ", "• "];

    /// Returns the item text after an unordered marker.
    ///
    /// The remainder is not trimmed further: `"-  two"` yields `" two"`.
    pub fn strip_unordered(trimmed: &str) -> Option<&str> {
        Self::UNORDERED
            .iter()
            .find_map(|marker| trimmed.strip_prefix(marker))
    }

    /// Returns the item text after an ordered marker such as `1.` or `2)`.
    ///
    /// The number itself is dropped; item numbering is positional.
    pub fn strip_ordered(trimmed: &str) -> Option<&str> {
        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        let ordered = ORDERED_REGEX.get_or_init(|| {
            Regex::new(r"^([0-9]+)[.)]\s+(.+)$").expect("Invalid ordered list regex")
        });

        ordered
            .captures(trimmed)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str())
    }
}
