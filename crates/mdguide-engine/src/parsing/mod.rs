pub mod blocks;
pub mod inline;
pub mod rope;
pub mod serialize;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};
use rope::lines_with_spans;

pub use serialize::to_markdown;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unterminated code fence opened on line {line}")]
    UnterminatedFence { line: usize },
}

/// Parses a document into its ordered block sequence.
///
/// Fails only when a fenced code block is never closed; no blocks are
/// returned in that case.
pub fn parse_document(rope: &Rope) -> Result<Vec<BlockNode>, ParseError> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    builder.finish()
}

/// Convenience for parsing a string slice.
pub fn parse_str(text: &str) -> Result<Vec<BlockNode>, ParseError> {
    parse_document(&Rope::from(text))
}
