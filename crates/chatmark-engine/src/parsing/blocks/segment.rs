use std::borrow::Cow;

use crate::parsing::{options::RenderOptions, text::lines_with_spans};

use super::kinds::Callout;

/// The separator between block candidates.
pub const BLOCK_BREAK: &str = "\n\n";

/// Splits raw reply text into block candidates.
///
/// This is phase 1 of rendering. Candidates are separated by `\n\n`. When the
/// text has no such separator anywhere, breaks are recovered heuristically in
/// front of call-out lines (see [`Callout`]). Whitespace-only candidates are
/// dropped.
pub struct BlockSegmenter<'o> {
    options: &'o RenderOptions,
}

impl<'o> BlockSegmenter<'o> {
    pub fn new(options: &'o RenderOptions) -> Self {
        Self { options }
    }

    /// Returns the ordered, non-blank block candidates of `raw`.
    pub fn segment(&self, raw: &str) -> Vec<String> {
        let text = normalize_line_endings(raw);

        let text = if !text.contains(BLOCK_BREAK) && self.options.recover_missing_breaks {
            self.recover_breaks(text)
        } else {
            text
        };

        text.split(BLOCK_BREAK)
            .filter(|candidate| !candidate.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Inserts a blank line before every call-out line except the first line.
    ///
    /// Finding no call-outs leaves the text untouched: one block.
    fn recover_breaks<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut out = String::with_capacity(text.len() + 16);
        let mut inserted = 0usize;

        for (i, line) in lines_with_spans(&text).enumerate() {
            if i > 0 {
                out.push('\n');
                if Callout::opens_block(line.text, &self.options.callout_markers) {
                    out.push('\n');
                    inserted += 1;
                }
            }
            out.push_str(line.text);
        }

        if inserted == 0 {
            return text;
        }
        log::debug!("recovered {inserted} missing block break(s)");
        Cow::Owned(out)
    }
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\r') {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.replace("\r\n", "\n").replace('\r', "\n"))
}
