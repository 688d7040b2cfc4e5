/// `[text](target)` delimiters.
pub struct InlineLink;

impl InlineLink {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const TARGET_OPEN: u8 = b'(';
    pub const TARGET_CLOSE: u8 = b')';
    /// Prefix that turns a link into an image, which is left as text.
    pub const IMAGE_BANG: u8 = b'!';
}
