/// A byte cursor over inline text with absolute position tracking.
///
/// Positions are `base + local index`, so spans produced while scanning a
/// block's text can be expressed relative to any origin the caller picks.
#[derive(Clone)]
pub struct Cursor<'a> {
    s: &'a str,
    base: usize,
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Current absolute byte position.
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Looks `n` bytes past the current position.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances until `byte` is under the cursor or input ends.
    ///
    /// Returns true when `byte` was found. The cursor is left on it.
    pub fn advance_to(&mut self, byte: u8) -> bool {
        match self.s.as_bytes()[self.i.min(self.s.len())..]
            .iter()
            .position(|&b| b == byte)
        {
            Some(offset) => {
                self.i += offset;
                true
            }
            None => {
                self.i = self.s.len();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_include_base() {
        let mut cur = Cursor::new("abc", 10);
        assert_eq!(cur.pos(), 10);
        cur.bump();
        assert_eq!(cur.pos(), 11);
    }

    #[test]
    fn peek_at_looks_ahead_without_moving() {
        let cur = Cursor::new("![x]", 0);
        assert_eq!(cur.peek_at(1), Some(b'['));
        assert_eq!(cur.peek_at(9), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn advance_to_stops_on_target() {
        let mut cur = Cursor::new("abc]def", 0);
        assert!(cur.advance_to(b']'));
        assert_eq!(cur.pos(), 3);
        assert_eq!(cur.peek(), Some(b']'));
    }

    #[test]
    fn advance_to_missing_byte_runs_to_end() {
        let mut cur = Cursor::new("abc", 0);
        assert!(!cur.advance_to(b')'));
        assert!(cur.eof());
        assert_eq!(cur.bump(), None);
    }
}
