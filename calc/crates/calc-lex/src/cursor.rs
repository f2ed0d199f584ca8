//! Character cursor for traversing an input expression.
//!
//! This module provides the `Cursor` struct which maintains the scan
//! position while the lexer walks the input one character at a time. It
//! handles UTF-8 encoded text correctly, so arbitrary `&str` input can be
//! scanned without slicing inside a multi-byte character.

/// A cursor for traversing input character by character.
///
/// # Example
///
/// ```
/// use calc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("max(1, 2)");
///
/// assert_eq!(cursor.current_char(), 'm');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The input being traversed.
    source: &'a str,

    /// Current byte position in the input.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the character at the cursor position.
    ///
    /// Returns `'\0'` at the end of the input. Since `'\0'` may also occur in
    /// the input itself, callers must test [`Cursor::is_at_end`] first.
    ///
    /// ```
    /// use calc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("");
    /// assert!(cursor.is_at_end());
    /// assert_eq!(cursor.current_char(), '\0');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        if self.position >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            return b as char;
        }

        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Returns the current character, or `None` at the end of the input.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        if self.is_at_end() {
            None
        } else {
            Some(self.current_char())
        }
    }

    /// Advances the cursor past the current character.
    ///
    /// Does nothing if already at the end.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            return;
        }

        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// The end of input is checked before every character is inspected.
    ///
    /// ```
    /// use calc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123+4");
    /// cursor.eat_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.current_char(), '+');
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the input.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the input from `start` up to the current position.
    ///
    /// ```
    /// use calc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("sqr(2)");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "sqr");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the input from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full input.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
