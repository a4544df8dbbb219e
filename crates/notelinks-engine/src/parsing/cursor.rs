/// A byte cursor over note text with position tracking.
///
/// All scanning is done on bytes so a cursor positioned inside a multi-byte
/// character never panics. Callers only slice the underlying `str` at the
/// positions of ASCII delimiters, which are always character boundaries.
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

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Moves the cursor to an absolute byte position.
    pub fn seek(&mut self, pos: usize) {
        self.i = pos;
    }

    /// Finds the next occurrence of `pat` at or after `from`, without moving.
    ///
    /// Returns the absolute byte position of the first byte of the match.
    pub fn find_from(&self, from: usize, pat: &[u8]) -> Option<usize> {
        if pat.is_empty() {
            return None;
        }
        let rest = self.s.as_bytes().get(from..)?;
        rest.windows(pat.len())
            .position(|w| w == pat)
            .map(|offset| from + offset)
    }
}
