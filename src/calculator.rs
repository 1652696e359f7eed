use tracing::{debug, error};

use crate::{
    analyzer::{core::ParseError, Parser, TreeBuilder},
    ast::Node,
    config::EvalConfig,
    eval::{evaluator::ExpressionEvaluator, value::Value},
    tokenizer::token::Tokenizer,
    Error, Result,
};

/// Tokenizer, tree builder and evaluator wired into one pipeline.
///
/// A `Calculator` keeps no state between calls, so a single instance can be
/// shared freely, including across threads.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: EvalConfig,
    tokenizer: Tokenizer,
    builder: TreeBuilder,
    evaluator: ExpressionEvaluator,
}

impl Calculator {
    pub fn new(config: EvalConfig) -> Self {
        let builder = TreeBuilder::new(&config);
        Self {
            config,
            tokenizer: Tokenizer::new(),
            builder,
            evaluator: ExpressionEvaluator::new(),
        }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Runs the parse phase only: tokenize and build the tree.
    pub fn parse(&self, expression: &str) -> std::result::Result<Node, ParseError> {
        let tokens = self.tokenizer.tokenize(expression)?;
        let (_, tree) = self.builder.parse(&tokens, 0)?;
        Ok(tree)
    }

    /// Parses and evaluates `expression`. Parse failures are reported before
    /// any evaluation starts.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn evaluate(&self, expression: &str) -> Result<Value> {
        let tree = self.parse(expression).map_err(|e| {
            error!("{}", e);
            Error::Parse(e)
        })?;
        debug!(%tree, "parsed");

        let value = self.evaluator.eval(&tree).map_err(|e| {
            error!("{}", e);
            Error::Eval(e)
        })?;
        debug!(%value, "evaluated");
        Ok(value)
    }
}

/// Evaluates one expression with the default configuration.
///
/// # Examples
///
/// ```
/// use sexp_eval::{evaluate, Value};
///
/// assert_eq!(evaluate("(+ 1 (max 2 3))").unwrap(), Value::Number(4.0));
/// assert!(evaluate("(foo 1 2)").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<Value> {
    Calculator::default().evaluate(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluator::EvalError;

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate("(+ 1 2 3)"), Ok(Value::Number(6.0)));
        assert_eq!(evaluate("(- 10 3 2)"), Ok(Value::Number(5.0)));
    }

    #[test]
    fn test_parse_phase_runs_first() {
        // Both an arity problem and an unknown token: the parse error wins.
        let result = evaluate("(+ (- 1) foo)");
        assert!(matches!(
            result,
            Err(Error::Parse(ParseError::UnknownToken { .. }))
        ));
    }

    #[test]
    fn test_eval_error_is_wrapped() {
        assert_eq!(
            evaluate("(- 5)"),
            Err(Error::Eval(EvalError::InsufficientOperands {
                operator: "-".to_string(),
                required: 2,
                supplied: 1,
            }))
        );
    }

    #[test]
    fn test_error_messages_name_the_cause() {
        let err = evaluate("(foo 1 2)").unwrap_err();
        assert_eq!(err.to_string(), "Parsing failed: Unknown token: foo");

        let err = evaluate("").unwrap_err();
        assert_eq!(err.to_string(), "Parsing failed: Non-empty string expected");

        let err = evaluate("()").unwrap_err();
        assert_eq!(err.to_string(), "Eval failed: Unknown node type: empty group");
    }

    #[test]
    fn test_config_reaches_builder() {
        let calculator = Calculator::new(EvalConfig::default().with_max_depth(1));
        assert_eq!(calculator.config().max_depth, 1);
        assert!(calculator.evaluate("(+ 1 2)").is_ok());
        assert!(matches!(
            calculator.evaluate("(+ 1 (+ 2 3))"),
            Err(Error::Parse(ParseError::NestingTooDeep { limit: 1, .. }))
        ));
    }

    #[test]
    fn test_parse_only() {
        let calculator = Calculator::default();
        let tree = calculator.parse("(max 1 2)").unwrap();
        assert_eq!(tree.to_string(), "(max 1 2)");
    }
}
