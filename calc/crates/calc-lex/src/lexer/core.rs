//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use tracing::trace;

use crate::charclass::{is_digit, is_letter, is_space};
use crate::cursor::Cursor;
use crate::span::{Span, SpannedToken};
use crate::tables::LexTables;
use crate::token::Token;

/// Lexer for the calc expression language.
///
/// The lexer makes a single left-to-right pass over its input. Each call to
/// [`Lexer::next_token`] skips whitespace and classifies exactly one token;
/// no input is ever rejected.
///
/// # Example
///
/// ```
/// use calc_lex::{LexTables, Lexer, Token};
///
/// let mut lexer = Lexer::new("5 % 2", LexTables::standard());
///
/// assert_eq!(lexer.next_token().map(|t| t.token), Some(Token::Number(5)));
/// assert_eq!(lexer.next_token().map(|t| t.token), Some(Token::Modulo));
/// assert_eq!(lexer.next_token().map(|t| t.token), Some(Token::Number(2)));
/// assert_eq!(lexer.next_token(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Character cursor for input traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Lookup tables for symbols and keywords.
    pub(crate) tables: &'a LexTables,

    /// Starting position of the current token (byte offset).
    token_start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source` using the given lookup tables.
    pub fn new(source: &'a str, tables: &'a LexTables) -> Self {
        Self {
            cursor: Cursor::new(source),
            tables,
            token_start: 0,
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// Whitespace is skipped. The first character of the token selects the
    /// scanner: digits start a number, letters start an identifier, and
    /// anything else is a single-character symbol or unknown token.
    pub fn next_token(&mut self) -> Option<SpannedToken> {
        self.cursor.eat_while(is_space);

        self.token_start = self.cursor.position();

        let c = self.cursor.peek()?;
        let token = if is_digit(c) {
            self.lex_number()
        } else if is_letter(c) {
            self.lex_identifier()
        } else {
            self.lex_symbol()
        };

        let span = Span::new(self.token_start, self.cursor.position());
        Some(SpannedToken::new(token, span))
    }

    /// Wraps unclassifiable input in an unknown token.
    pub(crate) fn unknown(&self, text: &str) -> Token {
        trace!(offset = self.token_start, text, "unknown token");
        Token::UnknownToken(text.to_string())
    }

    /// Returns the current byte position in the input.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the starting position of the most recent token.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns the input this lexer scans.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = SpannedToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // At most one token per remaining character.
        (0, Some(self.cursor.remaining().chars().count()))
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<SpannedToken> {
        Lexer::new(source, LexTables::standard()).collect()
    }

    #[test]
    fn test_dispatch_each_class() {
        let tokens: Vec<Token> = lex_all("7 max ( ,")
            .into_iter()
            .map(SpannedToken::into_token)
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::Number(7),
                Token::MaxToken,
                Token::OpeningBracket,
                Token::UnknownToken(",".to_string()),
            ]
        );
    }

    #[test]
    fn test_spans_point_at_source() {
        let source = "  sqr( 12 )";
        let tokens = lex_all(source);
        let slices: Vec<&str> = tokens.iter().map(|t| t.span.slice(source)).collect();
        assert_eq!(slices, vec!["sqr", "(", "12", ")"]);
        assert_eq!(tokens[0].span, Span::new(2, 5));
    }

    #[test]
    fn test_token_start_tracks_last_token() {
        let mut lexer = Lexer::new("1  +", LexTables::standard());
        lexer.next_token();
        assert_eq!(lexer.token_start(), 0);
        lexer.next_token();
        assert_eq!(lexer.token_start(), 3);
        assert_eq!(lexer.position(), 4);
    }

    #[test]
    fn test_exhausted_lexer_stays_exhausted() {
        let mut lexer = Lexer::new(" 1 ", LexTables::standard());
        assert!(lexer.next_token().is_some());
        assert!(lexer.next_token().is_none());
        assert!(lexer.next_token().is_none());
    }

    #[test]
    fn test_custom_tables_are_used() {
        let tables = LexTables::new();
        let tokens: Vec<Token> = Lexer::new("max-1", &tables).map(|t| t.token).collect();
        assert_eq!(tokens, vec![Token::MaxToken, Token::Minus, Token::Number(1)]);
    }

    #[test]
    fn test_size_hint_bounds_token_count() {
        let source = "1+2+3";
        let lexer = Lexer::new(source, LexTables::standard());
        let (_, upper) = lexer.size_hint();
        assert_eq!(upper, Some(5));
        assert_eq!(lexer.count(), 5);
    }
}
