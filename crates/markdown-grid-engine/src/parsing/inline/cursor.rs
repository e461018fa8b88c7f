/// A cursor for character-by-character inline scanning.
///
/// Operates over a pre-collected `char` slice so that look-behind (the
/// character before a `**`) and look-ahead are both O(1).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The characters being scanned.
    pub s: &'a [char],
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a [char]) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of input.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.s.get(self.i).copied()
    }

    /// Peeks `n` characters ahead of the current one.
    pub fn peek_at(&self, n: usize) -> Option<char> {
        self.s.get(self.i + n).copied()
    }

    /// The character just before the cursor, if any.
    pub fn prev(&self) -> Option<char> {
        self.i.checked_sub(1).and_then(|p| self.s.get(p).copied())
    }

    /// Characters left from the current position, inclusive.
    pub fn remaining(&self) -> usize {
        self.s.len().saturating_sub(self.i)
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        let mut ahead = self.s.get(self.i..).unwrap_or(&[]).iter();
        pat.chars().all(|p| ahead.next() == Some(&p))
    }

    /// Advances by one character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += 1;
        Some(c)
    }

    /// Advances by `n` characters.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
