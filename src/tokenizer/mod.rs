//! # Tokenizer
//!
//! First phase of the pipeline: raw expression text in, [`TokenSpan`](token::TokenSpan)s out.
//!
//! * [`token`]: token types and the [`Tokenizer`](token::Tokenizer) driver
//! * [`delimiter`]: `(` and `)`
//! * [`atom`]: numeric literal text and operator names
//! * [`whitespace`]: separators, never emitted as tokens

pub mod atom;
pub mod delimiter;
pub mod token;
pub mod whitespace;
