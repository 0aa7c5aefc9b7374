//! Character cursor for traversing source code.
//!
//! The [`Cursor`] tracks the byte position of the next character together
//! with its 1-based line and column. Columns count characters, not bytes.

use crate::unicode::is_whitespace;

/// A cursor for traversing source code character by character.
///
/// The position only ever moves forward; a new cursor is needed to
/// re-scan the same text.
///
/// # Example
///
/// ```
/// use clex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
///
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// assert_eq!(cursor.column(), 2);
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor, or `'\0'` at end of input.
    ///
    /// A `'\0'` inside the source is a real character; use
    /// [`Cursor::is_at_end`] to tell the two apart.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead (0 = current), or
    /// `'\0'` past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<=");
    /// assert_eq!(cursor.peek_char(0), '<');
    /// assert_eq!(cursor.peek_char(1), '=');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path for ASCII lookahead
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Advances the cursor past the current character.
    ///
    /// A newline moves to column 1 of the next line; any other character
    /// moves one column right. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances the cursor by `count` characters, stopping at end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("&&x");
    /// cursor.advance_n(2);
    /// assert_eq!(cursor.current_char(), 'x');
    /// assert_eq!(cursor.column(), 3);
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current character.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=<");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '<');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips whitespace, keeping line and column up to date.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("  \t\n  int");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current_char(), 'i');
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 3);
    /// ```
    pub fn skip_whitespace(&mut self) {
        self.advance_while(is_whitespace);
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source between `start` and the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("while (");
    /// let start = cursor.position();
    /// cursor.advance_n(5);
    /// assert_eq!(cursor.slice_from(start), "while");
    /// ```
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }
}
