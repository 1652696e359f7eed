//! # Whitespace Handling
//!
//! Whitespace only separates tokens; it is never emitted into the token stream.
//! The separator set is the ECMAScript `\s` class (see [`is_separator`]); runs
//! of separators count as one. U+0085 is not a separator, U+FEFF is.

use nom::{bytes::complete::take_while, error::context};

use super::token::ParserResult;

/// ECMAScript `WhiteSpace` and `LineTerminator` characters.
pub fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Skips any run of whitespace (possibly empty) at the front of `input`.
///
/// # Examples
///
/// ```
/// # use sexp_eval::tokenizer::whitespace::skip_whitespace;
/// let (rest, skipped) = skip_whitespace(" \t\n(+ 1 2)").unwrap();
/// assert_eq!(skipped, " \t\n");
/// assert_eq!(rest, "(+ 1 2)");
/// ```
#[tracing::instrument(level = "trace", skip(input))]
pub fn skip_whitespace(input: &str) -> ParserResult<&str> {
    context("whitespace", take_while(is_separator))(input)
}
