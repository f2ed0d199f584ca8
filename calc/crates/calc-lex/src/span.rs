//! Source location tracking.
//!
//! A [`Span`] is a half-open byte range into the tokenized input. The lexer
//! attaches one to every token it produces so consumers can point back at
//! the originating text.

use std::fmt;

use crate::token::Token;

/// A half-open byte range `start..end` into the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes. A reversed span has length zero.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the text the span covers.
    ///
    /// Returns an empty string if the span does not lie on character
    /// boundaries of `source`.
    ///
    /// ```
    /// use calc_lex::Span;
    ///
    /// assert_eq!(Span::new(4, 7).slice("1 + sqr(2)"), "sqr");
    /// ```
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A token together with the span of input it was produced from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpannedToken {
    /// The classified token.
    pub token: Token,
    /// Where in the input the token came from.
    pub span: Span,
}

impl SpannedToken {
    /// Pairs a token with its span.
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }

    /// Discards the span.
    pub fn into_token(self) -> Token {
        self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len_and_empty() {
        let span = Span::new(3, 8);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::new(4, 4).is_empty());
        assert!(Span::default().is_empty());
    }

    #[test]
    fn test_reversed_span_is_empty() {
        let span = Span::new(5, 3);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
        assert_eq!(span.slice("abcdefgh"), "");
    }

    #[test]
    fn test_span_slice() {
        let source = "max(5, 6)";
        assert_eq!(Span::new(0, 3).slice(source), "max");
        assert_eq!(Span::new(5, 6).slice(source), ",");
    }

    #[test]
    fn test_span_slice_out_of_bounds() {
        assert_eq!(Span::new(2, 40).slice("abc"), "");
        // Splits the two-byte 'é'.
        assert_eq!(Span::new(0, 1).slice("é"), "");
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(2, 5).to_string(), "2..5");
    }

    #[test]
    fn test_spanned_token_into_token() {
        let spanned = SpannedToken::new(Token::Number(9), Span::new(0, 1));
        assert_eq!(spanned.into_token(), Token::Number(9));
    }
}
