//! # Tree Builder
//!
//! Builds a [`Node`] tree from the token stream in a single depth-first,
//! left-to-right pass. `(` opens a [`Node::Group`] and `)` closes it; atoms are
//! classified into leaves as they are met. The whole input must reduce to
//! exactly one top-level node.

use tracing::debug;

use super::core::{ParseError, ParseResult, Parser};
use crate::{
    ast::Node,
    config::EvalConfig,
    operator::classify,
    tokenizer::token::{Token, TokenSpan},
};

#[derive(Debug, Clone)]
pub struct TreeBuilder {
    max_depth: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(&EvalConfig::default())
    }
}

impl TreeBuilder {
    pub fn new(config: &EvalConfig) -> Self {
        Self {
            max_depth: config.max_depth,
        }
    }

    /// Parses one element at `pos`: a leaf or a whole parenthesized group.
    fn parse_element(&self, input: &[TokenSpan], pos: usize, depth: usize) -> ParseResult<Node> {
        let span = input
            .get(pos)
            .ok_or_else(|| ParseError::syntax("unexpected end of input", end_position(input)))?;
        match &span.token {
            Token::Open => self.parse_group(input, pos + 1, depth + 1, span.start),
            Token::Close => Err(ParseError::syntax(
                "unexpected `)` without matching `(`",
                span.start,
            )),
            Token::Atom(atom) => Ok((pos + 1, classify(atom, span.start)?)),
        }
    }

    /// Parses group children starting just after the `(` found at `opened_at`,
    /// up to and including the matching `)`.
    fn parse_group(
        &self,
        input: &[TokenSpan],
        mut pos: usize,
        depth: usize,
        opened_at: usize,
    ) -> ParseResult<Node> {
        if depth > self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                position: opened_at,
            });
        }

        let mut children = Vec::new();
        loop {
            match input.get(pos) {
                None => return Err(ParseError::syntax("unclosed `(`", opened_at)),
                Some(TokenSpan {
                    token: Token::Close,
                    ..
                }) => return Ok((pos + 1, Node::Group(children))),
                Some(_) => {
                    let (next, child) = self.parse_element(input, pos, depth)?;
                    children.push(child);
                    pos = next;
                }
            }
        }
    }
}

impl Parser<TokenSpan, Node> for TreeBuilder {
    #[tracing::instrument(level = "debug", skip(self, input))]
    fn parse(&self, input: &[TokenSpan], pos: usize) -> ParseResult<Node> {
        let mut pos = pos;
        let mut nodes = Vec::new();
        let mut starts = Vec::new();

        while let Some(span) = input.get(pos) {
            let (next, node) = self.parse_element(input, pos, 0)?;
            starts.push(span.start);
            nodes.push(node);
            pos = next;
        }

        if nodes.len() != 1 {
            let position = starts
                .get(1)
                .copied()
                .unwrap_or_else(|| end_position(input));
            return Err(ParseError::syntax(
                format!(
                    "expected a single top-level expression, found {}",
                    nodes.len()
                ),
                position,
            ));
        }

        debug!(tokens = pos, "built expression tree");
        let tree = nodes.pop().ok_or_else(|| ParseError::syntax("empty expression", 0))?;
        Ok((pos, tree))
    }
}

fn end_position(input: &[TokenSpan]) -> usize {
    input.last().map(|span| span.end).unwrap_or(0)
}
