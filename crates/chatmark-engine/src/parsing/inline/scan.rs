use crate::parsing::text::Span;

use super::{
    cursor::Cursor,
    kinds::{Bold, CodeSpan},
};

/// Which pattern family produced a [`Match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Bold,
    Code,
}

/// A candidate formatting region inside one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub kind: MatchKind,
    /// Full span including delimiters.
    pub full: Span,
    /// Inner span (content between delimiters).
    pub inner: Span,
}

/// Finds every non-overlapping `**inner**` occurrence, scanning left to right.
///
/// `inner` must be non-empty and free of `*`. A failed attempt resumes one
/// byte later, so `***a**` yields a match starting at offset 1.
pub fn scan_bold(s: &str) -> Vec<Match> {
    scan_with(s, try_bold)
}

/// Finds every non-overlapping `` `inner` `` occurrence, scanning left to right.
///
/// `inner` must be non-empty, so a double backtick is never a code span.
pub fn scan_code(s: &str) -> Vec<Match> {
    scan_with(s, try_code)
}

fn scan_with(s: &str, try_match: fn(&mut Cursor<'_>) -> Option<Match>) -> Vec<Match> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    while !cur.eof() {
        if let Some(m) = try_match(&mut cur) {
            out.push(m);
            continue;
        }
        cur.bump();
    }
    out
}

/// Attempts a bold span at the current position.
///
/// On failure, cursor position is restored.
fn try_bold(cur: &mut Cursor<'_>) -> Option<Match> {
    if !cur.starts_with(Bold::DELIM) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(Bold::DELIM.len());
    let inner_start = cur.pos();
    cur.bump_until(Bold::STAR);
    let inner_end = cur.pos();

    if inner_end == inner_start || !cur.starts_with(Bold::DELIM) {
        *cur = saved;
        return None;
    }
    cur.bump_n(Bold::DELIM.len());

    Some(Match {
        kind: MatchKind::Bold,
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

/// Attempts a code span at the current position.
///
/// On failure, cursor position is restored.
fn try_code(cur: &mut Cursor<'_>) -> Option<Match> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();
    cur.bump_until(CodeSpan::TICK);
    let inner_end = cur.pos();

    if inner_end == inner_start || cur.peek() != Some(CodeSpan::TICK) {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(Match {
        kind: MatchKind::Code,
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fulls(ms: &[Match]) -> Vec<(usize, usize)> {
        ms.iter().map(|m| (m.full.start, m.full.end)).collect()
    }

    #[test]
    fn bold_simple() {
        let ms = scan_bold("**hi**");
        assert_eq!(ms.len(), 1);
        assert_eq!(ms[0].kind, MatchKind::Bold);
        assert_eq!(ms[0].full, Span { start: 0, end: 6 });
        assert_eq!(ms[0].inner, Span { start: 2, end: 4 });
    }

    #[test]
    fn bold_multiple_non_overlapping() {
        assert_eq!(fulls(&scan_bold("**a** and **b**")), vec![(0, 5), (10, 15)]);
    }

    #[test]
    fn bold_retries_one_byte_later() {
        let ms = scan_bold("***a**");
        assert_eq!(fulls(&ms), vec![(1, 6)]);
        assert_eq!(ms[0].inner.slice("***a**"), "a");
    }

    #[test]
    fn bold_rejects_empty_and_starred_inner() {
        assert!(scan_bold("****").is_empty());
        assert!(scan_bold("**a*b**").is_empty());
    }

    #[test]
    fn bold_unterminated() {
        assert!(scan_bold("**never closed").is_empty());
    }

    #[test]
    fn bold_inner_may_contain_backticks() {
        let s = "**a`b`**";
        let ms = scan_bold(s);
        assert_eq!(fulls(&ms), vec![(0, 8)]);
        assert_eq!(ms[0].inner.slice(s), "a`b`");
    }

    #[test]
    fn code_simple() {
        let s = "use `der` here";
        let ms = scan_code(s);
        assert_eq!(ms.len(), 1);
        assert_eq!(ms[0].kind, MatchKind::Code);
        assert_eq!(ms[0].inner.slice(s), "der");
    }

    #[test]
    fn code_double_tick_is_not_a_span() {
        let s = "``x`";
        let ms = scan_code(s);
        assert_eq!(fulls(&ms), vec![(1, 4)]);
        assert_eq!(ms[0].inner.slice(s), "x");
    }

    #[test]
    fn code_unterminated() {
        assert!(scan_code("`open").is_empty());
    }

    #[test]
    fn multibyte_inner_text() {
        let s = "**Erklärung:** `Straße`";
        let bold = scan_bold(s);
        let code = scan_code(s);
        assert_eq!(bold[0].inner.slice(s), "Erklärung:");
        assert_eq!(code[0].inner.slice(s), "Straße");
    }
}
