//! # sexp-eval
//!
//! Parses prefix, S-expression style arithmetic such as `(+ 1 (max 2 3))` and
//! evaluates it to a number.
//!
//! ## Pipeline
//!
//! 1. [`tokenizer`] splits the text into `(`, `)` and atom tokens
//! 2. [`analyzer`] builds a [`Node`] tree, classifying atoms with [`operator::classify`]
//! 3. [`eval`] walks the tree, applying operators from the fixed table in [`operator`]
//!
//! Failures in steps 1 and 2 surface as [`Error::Parse`], failures in step 3
//! as [`Error::Eval`]. Nothing is shared between calls.
//!
//! ```
//! use sexp_eval::{evaluate, Value};
//!
//! assert_eq!(evaluate("(- 10 3 2)").unwrap(), Value::Number(5.0));
//! assert_eq!(
//!     evaluate("(1 2 3)").unwrap(),
//!     Value::from(vec![1.0, 2.0, 3.0])
//! );
//! ```

pub mod analyzer;
pub mod ast;
pub mod calculator;
pub mod config;
pub mod error;
pub mod eval;
pub mod operator;
pub mod tokenizer;

// Re-exports
pub use ast::Node;
pub use calculator::{evaluate, Calculator};
pub use config::EvalConfig;
pub use error::{Error, Result};
pub use eval::value::Value;
