//! Evaluation of parsed expression trees.
//!
//! [`ExpressionEvaluator`](evaluator::ExpressionEvaluator) walks a
//! [`Node`](crate::ast::Node) tree. Operator groups are checked against the
//! operator's minimum arity and then handed to the operator's fold, which
//! evaluates operands one at a time as it consumes them.

pub mod evaluator;
pub mod value;
