/// Delimiters of a reference after its book name: `John 3:16-18`.
pub struct ReferenceSyntax;

impl ReferenceSyntax {
    /// Separates chapter from verse.
    pub const VERSE_SEP: u8 = b':';
    /// Joins the two ends of a verse range.
    pub const RANGE_DASH: u8 = b'-';
    /// The en dash typesetters use for ranges (U+2013).
    pub const RANGE_EN_DASH: &'static [u8] = "\u{2013}".as_bytes();
    /// Optional period closing an abbreviated book name (`Gen.`).
    pub const ABBREV_DOT: u8 = b'.';
}
