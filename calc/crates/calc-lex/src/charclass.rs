//! Character classification for the calc lexer.
//!
//! Classification follows the C locale: only ASCII characters are spaces,
//! digits or letters. Every other character, including all non-ASCII
//! letters and digits, falls through to the symbol table and, failing
//! that, becomes an unknown token.

/// Checks if a character is skipped between tokens.
///
/// The set is space, horizontal tab, line feed, vertical tab, form feed and
/// carriage return. Unlike [`char::is_ascii_whitespace`] this includes the
/// vertical tab.
///
/// # Example
///
/// ```
/// use calc_lex::charclass::is_space;
///
/// assert!(is_space(' '));
/// assert!(is_space('\x0B'));
/// assert!(!is_space('\u{00A0}'));  // no-break space
/// ```
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Checks if a character starts or continues a number literal.
///
/// ```
/// use calc_lex::charclass::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(!is_digit('٣'));  // Arabic-Indic three
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character starts or continues an identifier run.
///
/// Digits and underscores are not part of identifiers.
///
/// ```
/// use calc_lex::charclass::is_letter;
///
/// assert!(is_letter('q'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('é'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns the numeric value of an ASCII decimal digit.
#[inline]
pub fn digit_value(c: char) -> Option<u64> {
    c.to_digit(10).map(u64::from)
}
