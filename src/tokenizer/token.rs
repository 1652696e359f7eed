use std::fmt;

use nom::{branch::alt, error::VerboseError, IResult};

use super::{atom::parse_atom, delimiter::parse_delimiter, whitespace::skip_whitespace};
use crate::analyzer::core::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `(`
    Open,
    /// `)`
    Close,
    /// Numeric literal text or operator name
    Atom(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
            Token::Atom(atom) => write!(f, "{}", atom),
        }
    }
}

/// A token together with the byte range it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSpan {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Splits `input` into parenthesis and atom tokens, dropping whitespace.
    ///
    /// Fails with [`ParseError::InvalidInput`] when the input holds no token
    /// at all (empty or whitespace only).
    #[tracing::instrument(level = "debug", skip(self, input))]
    pub fn tokenize(&self, input: &str) -> TokenizerResult<Vec<TokenSpan>> {
        let mut tokens = Vec::new();
        let mut remaining = input;

        loop {
            let (rest, _) =
                skip_whitespace(remaining).map_err(|e| to_parse_error(input, remaining, e))?;
            if rest.is_empty() {
                break;
            }
            let start = input.len() - rest.len();

            match alt((parse_delimiter, parse_atom))(rest) {
                Ok((new_remaining, token)) => {
                    tokens.push(TokenSpan {
                        token,
                        start,
                        end: input.len() - new_remaining.len(),
                    });
                    remaining = new_remaining;
                }
                Err(e) => {
                    let error = to_parse_error(input, rest, e);
                    tracing::error!("{}", error);
                    return Err(error);
                }
            }
        }

        if tokens.is_empty() {
            return Err(ParseError::InvalidInput);
        }

        tracing::debug!(count = tokens.len(), "tokenized input");
        Ok(tokens)
    }
}

fn to_parse_error(input: &str, at: &str, e: nom::Err<VerboseError<&str>>) -> ParseError {
    let position = input.len() - at.len();
    let message = match e {
        nom::Err::Incomplete(needed) => format!("Incomplete input, {:?}", needed),
        nom::Err::Error(e) | nom::Err::Failure(e) => nom::error::convert_error(input, e),
    };
    ParseError::Syntax { message, position }
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

pub type TokenizerResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Tokenizer::new()
            .tokenize(input)
            .unwrap()
            .into_iter()
            .map(|span| span.token)
            .collect()
    }

    fn atom(s: &str) -> Token {
        Token::Atom(s.to_string())
    }

    #[test]
    fn test_tokenize_simple_expression() {
        assert_eq!(
            tokens("(+ 1 2)"),
            vec![Token::Open, atom("+"), atom("1"), atom("2"), Token::Close]
        );
    }

    #[test]
    fn test_parentheses_are_isolated() {
        assert_eq!(
            tokens("(+ 1(max 2 3))"),
            vec![
                Token::Open,
                atom("+"),
                atom("1"),
                Token::Open,
                atom("max"),
                atom("2"),
                atom("3"),
                Token::Close,
                Token::Close,
            ]
        );
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(
            tokens("  (  -\t10\n\n3 )  "),
            vec![Token::Open, atom("-"), atom("10"), atom("3"), Token::Close]
        );
    }

    #[test]
    fn test_spans() {
        let spans = Tokenizer::new().tokenize(" (max 12)").unwrap();
        assert_eq!(spans[0].start, 1);
        assert_eq!(spans[1].start, 2);
        assert_eq!(spans[1].end, 5);
        assert_eq!(spans[2].start, 6);
        assert_eq!(spans[2].end, 8);
        assert_eq!(spans[3].start, 8);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Tokenizer::new().tokenize(""), Err(ParseError::InvalidInput));
        assert_eq!(
            Tokenizer::new().tokenize(" \t\n "),
            Err(ParseError::InvalidInput)
        );
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Open.to_string(), "(");
        assert_eq!(Token::Close.to_string(), ")");
        assert_eq!(atom("max").to_string(), "max");
    }
}
