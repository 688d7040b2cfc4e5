use crate::parsing::rope::span::Span;

/// A scanned inline node. Spans index into the scanned text (plus `base`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A backtick-delimited code span. Raw zone: nothing is parsed inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Content between the backticks.
        inner: Span,
    },
    /// An inline link `[text](target)`.
    Link {
        /// Full span including brackets and parentheses.
        full: Span,
        /// Span of the link text between `[` and `]`.
        text: Span,
        /// Span of the target between `(` and `)`.
        target: Span,
    },
}

impl InlineNode {
    /// The full span covered by this node.
    pub fn full(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. } => *full,
            InlineNode::Link { full, .. } => *full,
        }
    }
}
