/// A byte range `[start, end)` into a document's source text.
///
/// Block nodes keep the span they were parsed from so findings and error
/// messages can point back at the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both `self` and `other`.
    #[must_use]
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Slices `text` with this span, offset by `base`.
    ///
    /// Returns an empty string when the span falls outside `text`.
    pub fn slice(self, text: &str, base: usize) -> &str {
        let start = self.start.saturating_sub(base);
        let end = self.end.saturating_sub(base);
        text.get(start..end).unwrap_or("")
    }
}
