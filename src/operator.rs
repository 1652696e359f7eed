//! # Operators and Node Classification
//!
//! The operator table is built once per process and never mutated. Each entry
//! pairs a symbol with its minimum arity and an evaluation function that
//! receives its operands unevaluated, so the function decides when (and
//! whether) each operand is evaluated.
//!
//! | symbol | min arity | result |
//! |--------|-----------|--------|
//! | `+`    | 1         | sum of all operands, starting from 0 |
//! | `-`    | 2         | first operand minus each following operand, left to right |
//! | `max`  | 1         | running maximum starting from the first operand |
//! | `min`  | 1         | running minimum starting from the first operand |
//!
//! The declared arities are a caller-facing guard; `-` would fold a single
//! operand just fine but still demands two.

use std::{collections::HashMap, fmt, str::FromStr};

use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::{
    analyzer::core::ParseError,
    ast::Node,
    eval::evaluator::{EvalError, EvalResult, ExpressionEvaluator},
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, IntoStaticStr, EnumIter,
)]
pub enum OperatorKind {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "max")]
    Max,
    #[strum(serialize = "min")]
    Min,
}

impl OperatorKind {
    pub fn arity(self) -> usize {
        match self {
            OperatorKind::Add => 1,
            OperatorKind::Subtract => 2,
            OperatorKind::Max => 1,
            OperatorKind::Min => 1,
        }
    }

    fn function(self) -> OperatorFn {
        match self {
            OperatorKind::Add => add,
            OperatorKind::Subtract => subtract,
            OperatorKind::Max => max,
            OperatorKind::Min => min,
        }
    }
}

/// Evaluation function of an operator. Operands arrive unevaluated.
pub type OperatorFn = fn(&ExpressionEvaluator, &[Node]) -> EvalResult<f64>;

pub struct Operator {
    pub kind: OperatorKind,
    /// Least number of operands a group must supply after the operator.
    pub arity: usize,
    function: OperatorFn,
}

impl Operator {
    fn new(kind: OperatorKind) -> Self {
        Self {
            kind,
            arity: kind.arity(),
            function: kind.function(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.kind.into()
    }

    /// Runs the operator's fold over `operands`. Arity is checked by the caller.
    pub fn apply(&self, evaluator: &ExpressionEvaluator, operands: &[Node]) -> EvalResult<f64> {
        (self.function)(evaluator, operands)
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("symbol", &self.symbol())
            .field("arity", &self.arity)
            .finish()
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

lazy_static! {
    pub static ref OPERATORS: HashMap<OperatorKind, Operator> = OperatorKind::iter()
        .map(|kind| (kind, Operator::new(kind)))
        .collect();
}

/// Finds the table entry for an operator symbol.
pub fn lookup(symbol: &str) -> Option<&'static Operator> {
    let table: &'static HashMap<OperatorKind, Operator> = &OPERATORS;
    let kind = OperatorKind::from_str(symbol).ok()?;
    table.get(&kind)
}

/// Turns an atom token into a leaf node: a number when it reads as a finite
/// number, otherwise an operator from the table.
#[tracing::instrument(level = "trace")]
pub fn classify(token: &str, position: usize) -> Result<Node, ParseError> {
    if let Some(value) = parse_number(token) {
        return Ok(Node::Number(value));
    }
    if let Some(op) = lookup(token) {
        return Ok(Node::Operator(op));
    }
    Err(ParseError::UnknownToken {
        token: token.to_string(),
        position,
    })
}

/// Reads `token` as a finite number.
///
/// Accepts decimal text with optional sign, fraction and exponent, and
/// unsigned `0x`, `0o` and `0b` integers. Non-finite results are rejected.
pub fn parse_number(token: &str) -> Option<f64> {
    let value = match parse_radix_integer(token) {
        Some(value) => value,
        None => token.parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}

fn parse_radix_integer(token: &str) -> Option<f64> {
    let mut chars = token.chars();
    if chars.next() != Some('0') {
        return None;
    }
    let radix = match chars.next()? {
        'x' | 'X' => 16,
        'o' | 'O' => 8,
        'b' | 'B' => 2,
        _ => return None,
    };
    let digits = chars.as_str();
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    // Exact integer first so the conversion to f64 rounds only once.
    match u128::from_str_radix(digits, radix) {
        Ok(value) => Some(value as f64),
        Err(_) => digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        }),
    }
}

fn first_operand(kind: OperatorKind, operands: &[Node]) -> EvalResult<(&Node, &[Node])> {
    operands
        .split_first()
        .ok_or_else(|| EvalError::InsufficientOperands {
            operator: kind.to_string(),
            required: kind.arity(),
            supplied: 0,
        })
}

fn add(evaluator: &ExpressionEvaluator, operands: &[Node]) -> EvalResult<f64> {
    operands.iter().try_fold(0.0, |acc, node| -> EvalResult<f64> {
        Ok(acc + evaluator.eval_operand(OperatorKind::Add, node)?)
    })
}

fn subtract(evaluator: &ExpressionEvaluator, operands: &[Node]) -> EvalResult<f64> {
    let (first, rest) = first_operand(OperatorKind::Subtract, operands)?;
    let init = evaluator.eval_operand(OperatorKind::Subtract, first)?;
    rest.iter().try_fold(init, |acc, node| -> EvalResult<f64> {
        Ok(acc - evaluator.eval_operand(OperatorKind::Subtract, node)?)
    })
}

fn max(evaluator: &ExpressionEvaluator, operands: &[Node]) -> EvalResult<f64> {
    let (first, rest) = first_operand(OperatorKind::Max, operands)?;
    let init = evaluator.eval_operand(OperatorKind::Max, first)?;
    rest.iter().try_fold(init, |acc, node| -> EvalResult<f64> {
        let current = evaluator.eval_operand(OperatorKind::Max, node)?;
        Ok(if acc > current { acc } else { current })
    })
}

fn min(evaluator: &ExpressionEvaluator, operands: &[Node]) -> EvalResult<f64> {
    let (first, rest) = first_operand(OperatorKind::Min, operands)?;
    let init = evaluator.eval_operand(OperatorKind::Min, first)?;
    rest.iter().try_fold(init, |acc, node| -> EvalResult<f64> {
        let current = evaluator.eval_operand(OperatorKind::Min, node)?;
        Ok(if acc < current { acc } else { current })
    })
}
