//! Symbol and keyword lookup tables.
//!
//! The tables are immutable once built. [`LexTables::standard`] returns the
//! process-wide instance for the calc language, initialized on first use.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::token::{Token, TokenKind};

/// Single-character symbols and their token kinds.
const SYMBOLS: [(char, TokenKind); 7] = [
    ('(', TokenKind::OpeningBracket),
    (')', TokenKind::ClosingBracket),
    ('+', TokenKind::Plus),
    ('-', TokenKind::Minus),
    ('*', TokenKind::Multiply),
    ('%', TokenKind::Modulo),
    ('/', TokenKind::Divide),
];

/// Reserved words and their token kinds. Matching is case-sensitive.
const KEYWORDS: [(&str, TokenKind); 2] = [
    ("max", TokenKind::MaxToken),
    ("sqr", TokenKind::SqrToken),
];

static STANDARD: LazyLock<LexTables> = LazyLock::new(LexTables::new);

/// The lookup tables consulted by the [`Lexer`](crate::Lexer).
///
/// # Example
///
/// ```
/// use calc_lex::{LexTables, Token};
///
/// let tables = LexTables::standard();
/// assert_eq!(tables.symbol('%'), Some(Token::Modulo));
/// assert_eq!(tables.keyword("sqr"), Some(Token::SqrToken));
/// assert_eq!(tables.keyword("Sqr"), None);
/// ```
#[derive(Debug, Clone)]
pub struct LexTables {
    symbols: FxHashMap<char, TokenKind>,
    keywords: FxHashMap<&'static str, TokenKind>,
}

impl LexTables {
    /// Builds a fresh copy of the calc language tables.
    pub fn new() -> Self {
        Self {
            symbols: SYMBOLS.into_iter().collect(),
            keywords: KEYWORDS.into_iter().collect(),
        }
    }

    /// Returns the shared, lazily initialized tables.
    pub fn standard() -> &'static LexTables {
        &STANDARD
    }

    /// Looks up a single-character symbol.
    #[inline]
    pub fn symbol(&self, c: char) -> Option<Token> {
        self.symbols.get(&c).and_then(|kind| kind.to_token())
    }

    /// Looks up a complete identifier run.
    #[inline]
    pub fn keyword(&self, name: &str) -> Option<Token> {
        self.keywords.get(name).and_then(|kind| kind.to_token())
    }

    /// Iterates over the symbol table in no particular order.
    pub fn symbols(&self) -> impl Iterator<Item = (char, TokenKind)> + '_ {
        self.symbols.iter().map(|(&c, &kind)| (c, kind))
    }

    /// Iterates over the keyword table in no particular order.
    pub fn keywords(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.keywords.iter().map(|(&name, &kind)| (name, kind))
    }
}

impl Default for LexTables {
    fn default() -> Self {
        Self::new()
    }
}
