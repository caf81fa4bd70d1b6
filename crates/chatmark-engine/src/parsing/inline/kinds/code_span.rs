/// Code span inline type with owned delimiter constant.
///
/// Only single-backtick spans with non-empty content are recognized.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
