use super::span::Span;

/// A reference to a single line of a block with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line in the block (excludes the `\n`).
    pub span: Span,
    /// The line text without its line terminator.
    pub text: &'a str,
}

/// Returns an iterator over `\n`-separated lines with their byte spans.
///
/// Unlike [`str::lines`], a trailing `\n` yields a final empty line, so
/// `"a\n"` produces `["a", ""]`. Blank lines carry meaning for paragraph
/// breaks and must not be swallowed.
pub fn lines_with_spans(s: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    s.split('\n').map(move |text| {
        let start = offset;
        let end = start + text.len();
        offset = end + 1;
        LineRef {
            span: Span { start, end },
            text,
        }
    })
}
