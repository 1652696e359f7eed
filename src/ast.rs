use std::fmt;

use crate::operator::Operator;

/// A node of the parsed expression tree.
///
/// Leaves are numbers and operator references; every parenthesized form
/// becomes a [`Node::Group`] holding its children in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(f64),
    Operator(&'static Operator),
    Group(Vec<Node>),
}

impl Node {
    /// Short description used in evaluation error messages.
    pub fn describe(&self) -> String {
        match self {
            Node::Number(value) => format!("number {}", value),
            Node::Operator(op) => format!("operator `{}`", op.symbol()),
            Node::Group(children) if children.is_empty() => "empty group".to_string(),
            Node::Group(_) => format!("group `{}`", self),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(value) => write!(f, "{}", value),
            Node::Operator(op) => write!(f, "{}", op.symbol()),
            Node::Group(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}
