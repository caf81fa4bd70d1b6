/// Bold span inline type with owned delimiter constants.
///
/// The inner text may not contain an asterisk, so `**a*b**` is not bold.
pub struct Bold;

impl Bold {
    /// The double asterisk that opens and closes a bold span.
    pub const DELIM: &'static [u8; 2] = b"**";
    /// The byte excluded from bold inner text.
    pub const STAR: u8 = b'*';
}
