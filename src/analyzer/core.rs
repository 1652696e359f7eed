//! # Core Parser Definitions
//!
//! The parser interface and the error type shared by every parse-phase step,
//! tokenizing included.

use thiserror::Error;

/// Parser trait defines the core parsing interface.
///
/// A parser reads `input` starting at `pos` and, on success, hands back the
/// position just past what it consumed together with the parsed value. The
/// cursor is threaded through return values, never held as shared state.
pub trait Parser<I, O> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O>;
}

/// On success, the new position and the parsed value.
pub type ParseResult<O> = Result<(usize, O), ParseError>;

/// Positions are byte offsets into the original expression text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Non-empty string expected")]
    InvalidInput,
    #[error("Unknown token: {token}")]
    UnknownToken { token: String, position: usize },
    #[error("Syntax error: {message} at position {position}")]
    Syntax { message: String, position: usize },
    #[error("Syntax error: nesting deeper than {limit} levels at position {position}")]
    NestingTooDeep { limit: usize, position: usize },
}

impl ParseError {
    pub fn syntax<S: Into<String>>(message: S, position: usize) -> Self {
        ParseError::Syntax {
            message: message.into(),
            position,
        }
    }

    pub fn get_position(&self) -> Option<usize> {
        match self {
            ParseError::InvalidInput => None,
            ParseError::UnknownToken { position, .. } => Some(*position),
            ParseError::Syntax { position, .. } => Some(*position),
            ParseError::NestingTooDeep { position, .. } => Some(*position),
        }
    }
}
