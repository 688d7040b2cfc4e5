//! Inline delimiter constants. The parser never hardcodes `` ` `` or `[`.

pub mod code_span;
pub mod link;

pub use code_span::CodeSpan;
pub use link::InlineLink;
