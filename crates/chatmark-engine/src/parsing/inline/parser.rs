use super::{
    scan::{Match, MatchKind, scan_bold, scan_code},
    types::{InlineContent, InlineNode},
};

/// Formats one line into plain, bold and code runs.
///
/// Each pattern family is scanned independently, the candidates are merged
/// by start offset, and overlaps are resolved first-match-wins: a candidate
/// starting before the end of the previously accepted match is dropped and
/// its bytes stay plain text. Unterminated delimiters are never an error.
///
/// A line without matches yields exactly one `Text` node holding the whole
/// line, so `format_inline("")` is `[Text("")]`.
pub fn format_inline(s: &str) -> InlineContent {
    let matches = merge_matches(scan_bold(s), scan_code(s));
    if matches.is_empty() {
        return InlineContent(vec![InlineNode::Text(s.to_string())]);
    }

    let mut out = vec![];
    let mut last = 0usize;
    for m in &matches {
        if m.full.start > last {
            out.push(InlineNode::Text(s[last..m.full.start].to_string()));
        }
        let inner = m.inner.slice(s).to_string();
        out.push(match m.kind {
            MatchKind::Bold => InlineNode::Bold(inner),
            MatchKind::Code => InlineNode::Code(inner),
        });
        last = m.full.end;
    }
    if last < s.len() {
        out.push(InlineNode::Text(s[last..].to_string()));
    }

    InlineContent(out)
}

/// Merges the per-family match lists into one non-overlapping timeline.
///
/// The families use disjoint delimiter bytes, so two candidates never share a
/// start offset and the stable sort is fully determined by position.
pub fn merge_matches(bold: Vec<Match>, code: Vec<Match>) -> Vec<Match> {
    let mut all = bold;
    all.extend(code);
    all.sort_by_key(|m| m.full.start);

    let mut accepted: Vec<Match> = Vec::with_capacity(all.len());
    for m in all {
        let overlaps = accepted.last().is_some_and(|prev| m.full.start < prev.full.end);
        if !overlaps {
            accepted.push(m);
        }
    }
    accepted
}
