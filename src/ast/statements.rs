use std::{fmt::Display, slice::Iter};

use crate::{lexer::tokens::Token, Span};

use super::ast::{Expr, Node, Stmt};

/// Expression Statement
/// An expression used in statement position.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expr,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        self.expression.get_span()
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Return Statement
/// `value` is absent when the returned expression failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<Expr>,
    pub span: Span,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {};", self.token.literal, value),
            None => write!(f, "{};", self.token.literal),
        }
    }
}

/// The branch taken when an if condition is false.
#[derive(Debug, Clone, PartialEq)]
pub enum IfAlternate {
    Block(BlockStmt),
    /// `else if`
    If(Box<IfStmt>),
}

/// If Statement
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub token: Token,
    pub condition: Expr,
    pub consequence: BlockStmt,
    pub alternate: Option<IfAlternate>,
    pub span: Span,
}

impl Node for IfStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for IfStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if {} {{{}}}", self.condition, self.consequence)?;

        match &self.alternate {
            Some(IfAlternate::Block(block)) => write!(f, " else {{{}}}", block),
            Some(IfAlternate::If(stmt)) => write!(f, " else {}", stmt),
            None => Ok(()),
        }
    }
}

/// Block Statement
/// Statements between `{` and `}`. Renders without the braces.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub token: Token,
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

impl Node for BlockStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.body {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
