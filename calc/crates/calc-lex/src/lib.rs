//! calc-lex - Lexical Analyzer for the calc expression language
//!
//! This crate provides the tokenizer for calc, a small language of integer
//! arithmetic: `+ - * % /`, parentheses, and the functions `max` and `sqr`.
//! It transforms an input string into the flat sequence of tokens a parser
//! would consume.
//!
//! # Example Usage
//!
//! ```
//! use calc_lex::{tokenize, Token};
//!
//! let tokens = tokenize("max(5, 7)");
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::MaxToken,
//!         Token::OpeningBracket,
//!         Token::Number(5),
//!         Token::UnknownToken(",".to_string()),
//!         Token::Number(7),
//!         Token::ClosingBracket,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`tables`] - Symbol and keyword lookup tables
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for input traversal
//! - [`span`] - Byte ranges tying tokens to their input
//! - [`charclass`] - Whitespace, digit and letter classification
//!
//! # Tokenization Rules
//!
//! Whitespace separates tokens and is otherwise dropped. A run of digits is
//! a `Number`; a run of letters is `max`, `sqr`, or an `UnknownToken`
//! holding the run. Every other character is a one-character token: a
//! bracket or operator if the symbol table knows it, an `UnknownToken`
//! otherwise.
//!
//! Tokenization never fails. Deciding whether the token sequence forms a
//! valid expression is left to the consumer.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod charclass;
pub mod cursor;
pub mod lexer;
pub mod span;
pub mod tables;
pub mod token;

mod edge_cases;

use tracing::debug;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use span::{Span, SpannedToken};
pub use tables::LexTables;
pub use token::{Token, TokenKind};

/// Tokenizes `input` with the standard tables.
///
/// Whitespace is skipped; every other character ends up in exactly one
/// token. The result is in input order.
pub fn tokenize(input: &str) -> Vec<Token> {
    tokenize_spanned(input)
        .into_iter()
        .map(SpannedToken::into_token)
        .collect()
}

/// Tokenizes `input` with the standard tables, keeping each token's span.
pub fn tokenize_spanned(input: &str) -> Vec<SpannedToken> {
    tokenize_with(input, LexTables::standard())
}

/// Tokenizes `input` with caller-provided tables.
pub fn tokenize_with(input: &str, tables: &LexTables) -> Vec<SpannedToken> {
    let tokens: Vec<SpannedToken> = Lexer::new(input, tables).collect();

    debug!(
        input_len = input.len(),
        tokens = tokens.len(),
        unknown = tokens.iter().filter(|t| t.token.is_unknown()).count(),
        "tokenized input"
    );

    tokens
}
