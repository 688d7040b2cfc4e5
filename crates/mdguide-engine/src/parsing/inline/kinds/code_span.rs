/// Code span delimiters. Code spans suppress link parsing inside them.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';
}
