//! Number literal lexing.
//!
//! This module handles lexing of unsigned decimal integer literals.

use tracing::debug;

use crate::charclass::digit_value;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a decimal integer literal.
    ///
    /// Consumes the maximal run of ASCII digits starting at the cursor and
    /// accumulates `value * 10 + digit` for each one. The end of input is
    /// checked before each digit is read, so a literal that ends the input
    /// is consumed completely.
    ///
    /// Literals beyond `u64::MAX` wrap around. This is not an error; the
    /// wrapped value is returned.
    ///
    /// # Returns
    ///
    /// `Token::Number(value)`. Called with the cursor off a digit, it
    /// consumes nothing and returns `Token::Number(0)`.
    pub fn lex_number(&mut self) -> Token {
        let start = self.cursor.position();
        let mut value: u64 = 0;
        let mut overflowed = false;

        while let Some(digit) = self.cursor.peek().and_then(digit_value) {
            let next = value.checked_mul(10).and_then(|v| v.checked_add(digit));
            value = match next {
                Some(v) => v,
                None => {
                    overflowed = true;
                    value.wrapping_mul(10).wrapping_add(digit)
                },
            };
            self.cursor.advance();
        }

        if overflowed {
            debug!(
                literal = self.cursor.slice_from(start),
                wrapped = value,
                "integer literal overflow"
            );
        }

        Token::Number(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::tables::LexTables;
    use crate::token::Token;

    fn lex_num(source: &str) -> Token {
        let mut lexer = crate::Lexer::new(source, LexTables::standard());
        lexer.lex_number()
    }

    #[test]
    fn test_decimal_integer() {
        assert_eq!(lex_num("42"), Token::Number(42));
        assert_eq!(lex_num("0"), Token::Number(0));
        assert_eq!(lex_num("123456"), Token::Number(123456));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(lex_num("007"), Token::Number(7));
        assert_eq!(lex_num("0000"), Token::Number(0));
    }

    #[test]
    fn test_stops_at_non_digit() {
        let mut lexer = crate::Lexer::new("12a", LexTables::standard());
        assert_eq!(lexer.lex_number(), Token::Number(12));
        assert_eq!(lexer.position(), 2);
    }

    #[test]
    fn test_digit_run_at_end_of_input() {
        let mut lexer = crate::Lexer::new("9", LexTables::standard());
        assert_eq!(lexer.lex_number(), Token::Number(9));
        assert_eq!(lexer.position(), 1);
    }

    #[test]
    fn test_u64_max() {
        assert_eq!(lex_num("18446744073709551615"), Token::Number(u64::MAX));
    }

    #[test]
    fn test_overflow_wraps() {
        // u64::MAX + 1
        assert_eq!(lex_num("18446744073709551616"), Token::Number(0));
        // u64::MAX * 10 + 9, modulo 2^64
        assert_eq!(lex_num("184467440737095516159"), Token::Number(u64::MAX));
    }

    #[test]
    fn test_off_digit_consumes_nothing() {
        let mut lexer = crate::Lexer::new("x", LexTables::standard());
        assert_eq!(lexer.lex_number(), Token::Number(0));
        assert_eq!(lexer.position(), 0);
    }
}
