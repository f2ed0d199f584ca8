//! Symbol lexing.
//!
//! This module handles every character that starts neither a number nor an
//! identifier: brackets, operators, and unrecognized punctuation.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a single-character symbol.
    ///
    /// Consumes exactly one character. Characters found in the symbol table
    /// map to their token; any other character becomes a one-character
    /// `Token::UnknownToken`.
    ///
    /// Handles: `(`, `)`, `+`, `-`, `*`, `%`, `/`
    ///
    /// The cursor must not be at the end of input.
    pub fn lex_symbol(&mut self) -> Token {
        let start = self.cursor.position();
        let c = self.cursor.current_char();
        self.cursor.advance();

        match self.tables.symbol(c) {
            Some(token) => token,
            None => self.unknown(self.cursor.slice_from(start)),
        }
    }
}
