//! Token type definitions for the calc expression language.
//!
//! This module defines [`Token`], the closed set of lexical units the
//! tokenizer produces, together with [`TokenKind`], its payload-free
//! discriminant.

use std::fmt;

/// A lexical token of the calc expression language.
///
/// Tokens are produced by the [`Lexer`](crate::Lexer) in source order.
/// Malformed input is never an error; it is represented by
/// [`Token::UnknownToken`] and left for a consumer to reject.
///
/// # Example
///
/// ```
/// use calc_lex::{tokenize, Token};
///
/// let tokens = tokenize("sqr(4)");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::SqrToken,
///         Token::OpeningBracket,
///         Token::Number(4),
///         Token::ClosingBracket,
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// `(`
    OpeningBracket,
    /// `)`
    ClosingBracket,

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `%`
    Modulo,
    /// `/`
    Divide,

    /// The `max` keyword.
    MaxToken,
    /// The `sqr` keyword.
    SqrToken,
    /// Reserved for a unary negation function. No input produces it.
    MinToken,
    /// Reserved for an absolute value function. No input produces it.
    AbsToken,

    /// An unsigned decimal integer literal.
    Number(u64),

    /// Input that is not part of the language: a run of letters that is not
    /// a keyword, or a single unrecognized character. Never empty.
    UnknownToken(String),
}

/// The payload-free discriminant of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// See [`Token::OpeningBracket`].
    OpeningBracket,
    /// See [`Token::ClosingBracket`].
    ClosingBracket,
    /// See [`Token::Plus`].
    Plus,
    /// See [`Token::Minus`].
    Minus,
    /// See [`Token::Multiply`].
    Multiply,
    /// See [`Token::Modulo`].
    Modulo,
    /// See [`Token::Divide`].
    Divide,
    /// See [`Token::MaxToken`].
    MaxToken,
    /// See [`Token::SqrToken`].
    SqrToken,
    /// See [`Token::MinToken`].
    MinToken,
    /// See [`Token::AbsToken`].
    AbsToken,
    /// See [`Token::Number`].
    Number,
    /// See [`Token::UnknownToken`].
    UnknownToken,
}

impl TokenKind {
    /// Builds the token for a kind that carries no payload.
    ///
    /// Returns `None` for [`TokenKind::Number`] and
    /// [`TokenKind::UnknownToken`], which cannot be built without a value.
    pub fn to_token(self) -> Option<Token> {
        let token = match self {
            TokenKind::OpeningBracket => Token::OpeningBracket,
            TokenKind::ClosingBracket => Token::ClosingBracket,
            TokenKind::Plus => Token::Plus,
            TokenKind::Minus => Token::Minus,
            TokenKind::Multiply => Token::Multiply,
            TokenKind::Modulo => Token::Modulo,
            TokenKind::Divide => Token::Divide,
            TokenKind::MaxToken => Token::MaxToken,
            TokenKind::SqrToken => Token::SqrToken,
            TokenKind::MinToken => Token::MinToken,
            TokenKind::AbsToken => Token::AbsToken,
            TokenKind::Number | TokenKind::UnknownToken => return None,
        };
        Some(token)
    }
}

impl Token {
    /// Returns the discriminant of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::OpeningBracket => TokenKind::OpeningBracket,
            Token::ClosingBracket => TokenKind::ClosingBracket,
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::Multiply => TokenKind::Multiply,
            Token::Modulo => TokenKind::Modulo,
            Token::Divide => TokenKind::Divide,
            Token::MaxToken => TokenKind::MaxToken,
            Token::SqrToken => TokenKind::SqrToken,
            Token::MinToken => TokenKind::MinToken,
            Token::AbsToken => TokenKind::AbsToken,
            Token::Number(_) => TokenKind::Number,
            Token::UnknownToken(_) => TokenKind::UnknownToken,
        }
    }

    /// Returns true for [`Token::UnknownToken`].
    pub fn is_unknown(&self) -> bool {
        matches!(self, Token::UnknownToken(_))
    }

    /// Returns true for the function keywords, including the reserved ones.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::MaxToken | Token::SqrToken | Token::MinToken | Token::AbsToken
        )
    }

    /// Returns true for the five arithmetic operators.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::Plus | Token::Minus | Token::Multiply | Token::Modulo | Token::Divide
        )
    }

    /// Returns a one-line, human readable description of the token.
    ///
    /// ```
    /// use calc_lex::Token;
    ///
    /// assert_eq!(Token::Number(5).describe(), "Number: 5");
    /// assert_eq!(Token::UnknownToken(",".into()).describe(), "Unknown Token: ,");
    /// assert_eq!(Token::MaxToken.describe(), "Max Token");
    /// ```
    pub fn describe(&self) -> String {
        match self {
            Token::OpeningBracket => "Opening Bracket".to_string(),
            Token::ClosingBracket => "Closing Bracket".to_string(),
            Token::Plus => "Plus".to_string(),
            Token::Minus => "Minus".to_string(),
            Token::Multiply => "Multiply".to_string(),
            Token::Modulo => "Modulo".to_string(),
            Token::Divide => "Divide".to_string(),
            Token::MaxToken => "Max Token".to_string(),
            Token::SqrToken => "Sqr Token".to_string(),
            Token::MinToken => "Min Token".to_string(),
            Token::AbsToken => "Abs Token".to_string(),
            Token::Number(value) => format!("Number: {}", value),
            Token::UnknownToken(text) => format!("Unknown Token: {}", text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpeningBracket => write!(f, "("),
            Token::ClosingBracket => write!(f, ")"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Multiply => write!(f, "*"),
            Token::Modulo => write!(f, "%"),
            Token::Divide => write!(f, "/"),
            Token::MaxToken => write!(f, "max"),
            Token::SqrToken => write!(f, "sqr"),
            Token::MinToken => write!(f, "min"),
            Token::AbsToken => write!(f, "abs"),
            Token::Number(value) => write!(f, "{}", value),
            Token::UnknownToken(text) => write!(f, "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lexemes() {
        assert_eq!(Token::OpeningBracket.to_string(), "(");
        assert_eq!(Token::ClosingBracket.to_string(), ")");
        assert_eq!(Token::Modulo.to_string(), "%");
        assert_eq!(Token::MaxToken.to_string(), "max");
        assert_eq!(Token::Number(1234).to_string(), "1234");
        assert_eq!(Token::UnknownToken("foo".to_string()).to_string(), "foo");
    }

    #[test]
    fn test_describe() {
        assert_eq!(Token::SqrToken.describe(), "Sqr Token");
        assert_eq!(Token::Number(0).describe(), "Number: 0");
        assert_eq!(
            Token::UnknownToken("&".to_string()).describe(),
            "Unknown Token: &"
        );
        assert_eq!(Token::Divide.describe(), "Divide");
    }

    #[test]
    fn test_kind_roundtrip_for_payload_free_tokens() {
        let tokens = [
            Token::OpeningBracket,
            Token::ClosingBracket,
            Token::Plus,
            Token::Minus,
            Token::Multiply,
            Token::Modulo,
            Token::Divide,
            Token::MaxToken,
            Token::SqrToken,
            Token::MinToken,
            Token::AbsToken,
        ];
        for token in tokens {
            assert_eq!(token.kind().to_token(), Some(token));
        }
    }

    #[test]
    fn test_payload_kinds_have_no_default_token() {
        assert_eq!(TokenKind::Number.to_token(), None);
        assert_eq!(TokenKind::UnknownToken.to_token(), None);
        assert_eq!(Token::Number(7).kind(), TokenKind::Number);
    }

    #[test]
    fn test_predicates() {
        assert!(Token::UnknownToken("x".to_string()).is_unknown());
        assert!(!Token::Number(1).is_unknown());
        assert!(Token::MaxToken.is_keyword());
        assert!(Token::AbsToken.is_keyword());
        assert!(!Token::Plus.is_keyword());
        assert!(Token::Modulo.is_operator());
        assert!(!Token::OpeningBracket.is_operator());
    }
}
