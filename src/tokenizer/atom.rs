//! # Atom Tokens
//!
//! An atom is any maximal run of characters that are neither separators nor
//! parentheses. Whether it names a number or an operator is decided later by
//! [`classify`](crate::operator::classify).

use nom::{bytes::complete::take_while1, combinator::map, error::context};

use super::{
    token::{ParserResult, Token},
    whitespace::is_separator,
};

fn is_atom_char(c: char) -> bool {
    !is_separator(c) && c != '(' && c != ')'
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_atom(input: &str) -> ParserResult<Token> {
    context(
        "atom",
        map(take_while1(is_atom_char), |atom: &str| {
            Token::Atom(atom.to_string())
        }),
    )(input)
}
