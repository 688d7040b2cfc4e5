//! # Inline Scanning
//!
//! Cursor-based scanning of the text carried by headings, paragraphs, list
//! items and table cells.
//!
//! Two constructs are recognized:
//! - code spans (`` `code` ``), which are raw zones: nothing inside them is parsed
//! - links (`[text](target)`), recognized only outside raw zones
//!
//! Everything else is emitted as `Text`. The scanner never fails; an unclosed
//! construct falls back to plain text.
//!
//! Image syntax (`![alt](src)`) is passed through as text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{links_in, parse_inline};
pub use types::InlineNode;
