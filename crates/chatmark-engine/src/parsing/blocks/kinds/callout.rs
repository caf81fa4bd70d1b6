use std::sync::OnceLock;

use regex::Regex;

/// Lines that open a new logical block in chat replies.
///
/// Models often drop the blank line before a labelled section such as
/// `**Erklärung:** ...` or a tip introduced by an emoji. These lines are the
/// only places the segmenter will insert a synthetic break.
pub struct Callout;

impl Callout {
    /// Marker glyphs recognized when no other set is configured.
    pub const DEFAULT_MARKERS: [&'static str; 3] = ["💡", "🚀", "📝"];

    /// Returns true if `line` starts with a bold label like `**Tipp:**`.
    ///
    /// The label text may not contain `*`. The line is not trimmed first.
    pub fn is_bold_label(line: &str) -> bool {
        static LABEL_REGEX: OnceLock<Regex> = OnceLock::new();
        let label = LABEL_REGEX
            .get_or_init(|| Regex::new(r"^\*\*[^*\n]+:\*\*").expect("Invalid bold label regex"));
        label.is_match(line)
    }

    /// Returns true if `line` opens a call-out: a bold label or one of `markers`.
    pub fn opens_block<S: AsRef<str>>(line: &str, markers: &[S]) -> bool {
        Self::is_bold_label(line)
            || markers
                .iter()
                .map(AsRef::as_ref)
                .any(|m| !m.is_empty() && line.starts_with(m))
    }
}
