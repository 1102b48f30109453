/// A cursor for left-to-right scanning with byte position tracking.
///
/// Positions are byte offsets into `s`. Byte-level moves are only used over
/// ASCII; [`Cursor::bump_char`] keeps the cursor on character boundaries
/// when stepping over arbitrary text.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances past one whole character.
    pub fn bump_char(&mut self) {
        let width = self
            .s
            .get(self.i..)
            .and_then(|rest| rest.chars().next())
            .map_or(1, char::len_utf8);
        self.i += width;
    }

    /// Moves to an absolute byte position.
    pub fn jump_to(&mut self, pos: usize) {
        self.i = pos;
    }

    /// Consumes bytes while `pred` holds, returning how many were consumed.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.i;
        while self.peek().is_some_and(&pred) {
            self.i += 1;
        }
        self.i - start
    }

    /// Consumes a run of ASCII digits and returns them.
    pub fn eat_digits(&mut self) -> &'a str {
        let s = self.s;
        let start = self.i;
        self.eat_while(|b| b.is_ascii_digit());
        &s[start..self.i]
    }
}
