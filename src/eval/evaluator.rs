use thiserror::Error;
use tracing::{debug, trace};

use super::value::Value;
use crate::{ast::Node, operator::OperatorKind};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Not sufficient operands to apply operator {operator}: expected at least {required}, got {supplied}")]
    InsufficientOperands {
        operator: String,
        required: usize,
        supplied: usize,
    },
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),
    #[error("Unexpected node: {0}")]
    UnexpectedNode(String),
    #[error("Operand of {operator} evaluated to a list, expected a number")]
    ExpectedNumber { operator: String },
}

pub type EvalResult<T> = Result<T, EvalError>;

/// Tree-walking evaluator.
///
/// Holds no state; every call is a pure function of the tree it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpressionEvaluator;

impl ExpressionEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn eval(&self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::Number(value) => Ok(Value::Number(*value)),
            Node::Group(children) => self.eval_group(children),
            Node::Operator(_) => Err(EvalError::UnexpectedNode(node.describe())),
        }
    }

    /// Evaluates one operand on behalf of `operator`, which needs a number.
    pub fn eval_operand(&self, operator: OperatorKind, node: &Node) -> EvalResult<f64> {
        self.eval(node)?
            .as_number()
            .ok_or_else(|| EvalError::ExpectedNumber {
                operator: operator.to_string(),
            })
    }

    fn eval_group(&self, children: &[Node]) -> EvalResult<Value> {
        match children.split_first() {
            Some((Node::Operator(op), operands)) => {
                if operands.len() < op.arity {
                    return Err(EvalError::InsufficientOperands {
                        operator: op.symbol().to_string(),
                        required: op.arity,
                        supplied: operands.len(),
                    });
                }
                trace!(operator = op.symbol(), operands = operands.len(), "apply");
                op.apply(self, operands).map(Value::Number)
            }
            // A number in head position: every child is evaluated on its own.
            Some((Node::Number(_), _)) => {
                debug!(len = children.len(), "numeric head, evaluating group as a list");
                children
                    .iter()
                    .map(|child| self.eval(child))
                    .collect::<EvalResult<Vec<_>>>()
                    .map(Value::List)
            }
            Some((head, _)) => Err(EvalError::UnknownNodeType(head.describe())),
            None => Err(EvalError::UnknownNodeType(
                Node::Group(Vec::new()).describe(),
            )),
        }
    }
}
