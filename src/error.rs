use thiserror::Error;

use crate::analyzer::core::ParseError;
use crate::eval::evaluator::EvalError;

/// Failure of a single evaluation call.
///
/// The two pipeline phases keep separate error types; this enum wraps them so
/// that callers see one result type carrying the original cause.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Parsing failed: {0}")]
    Parse(#[from] ParseError),
    #[error("Eval failed: {0}")]
    Eval(#[from] EvalError),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    pub fn is_eval(&self) -> bool {
        matches!(self, Error::Eval(_))
    }
}
