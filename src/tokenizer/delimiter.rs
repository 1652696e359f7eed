//! # Parenthesis Tokens
//!
//! `(` and `)` always form tokens of their own, whatever surrounds them.

use nom::{branch::alt, character::complete::char, combinator::value, error::context};

use super::token::{ParserResult, Token};

#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_delimiter(input: &str) -> ParserResult<Token> {
    context(
        "parenthesis",
        alt((value(Token::Open, char('(')), value(Token::Close, char(')')))),
    )(input)
}
