use crate::parsing::rope::span::Span;

/// A cursor for byte-wise inline parsing with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position
/// in the document (via `base` offset).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Base offset in the document (added to local index for absolute positions).
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Returns the unconsumed remainder of the current line, without its `\n`.
    ///
    /// Empty when the cursor is at EOF or not on a char boundary.
    pub fn line_rest(&self) -> &'a str {
        let rest = self.s.get(self.i..).unwrap_or("");
        match rest.find('\n') {
            Some(n) => &rest[..n],
            None => rest,
        }
    }

    /// Returns the text covered by an absolute span.
    ///
    /// The span must lie within this cursor's string and on char boundaries;
    /// spans produced by scanning this cursor always do.
    pub fn slice(&self, sp: Span) -> &'a str {
        &self.s[sp.start - self.base..sp.end - self.base]
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
