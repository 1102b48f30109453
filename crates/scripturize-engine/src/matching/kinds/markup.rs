/// HTML delimiters with owned constants.
///
/// Everything between a tag's `<` and `>` is a raw zone, as is the body of
/// each element listed in [`Markup::RAW_ELEMENTS`].
pub struct Markup;

impl Markup {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
    pub const END_TAG: u8 = b'/';
    pub const COMMENT_OPEN: &'static [u8; 4] = b"<!--";
    pub const COMMENT_CLOSE: &'static [u8; 3] = b"-->";
    /// Elements whose content is never linked: existing links, code and
    /// non-text content.
    pub const RAW_ELEMENTS: &'static [&'static str] = &["a", "code", "pre", "script", "style"];
}
