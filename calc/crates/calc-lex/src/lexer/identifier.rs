//! Identifier and keyword lexing.
//!
//! This module handles lexing of letter runs, which are either keywords or
//! unknown identifiers.

use crate::charclass::is_letter;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the maximal run of ASCII letters starting at the cursor, then
    /// looks the whole run up in the keyword table. Only an exact,
    /// case-sensitive match of the complete run is a keyword, so `maxi` is a
    /// single unknown token rather than `max` followed by `i`.
    ///
    /// # Returns
    ///
    /// Either a keyword token (e.g., `Token::MaxToken`) or
    /// `Token::UnknownToken(run)`
    pub fn lex_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.eat_while(is_letter);

        let text = self.cursor.slice_from(start);

        self.tables
            .keyword(text)
            .unwrap_or_else(|| self.unknown(text))
    }
}
