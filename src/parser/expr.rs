use crate::{
    ast::{
        ast::{Expr, Node},
        expressions::{BooleanExpr, FloatExpr, IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an expression whose operators bind tighter than `bp`.
///
/// Starts on the first token of the expression and stops on its last token.
/// Returns `None` when no expression could be built; the error is already recorded.
/// A failed operand does not stop the operator loop, so the rest of the
/// expression is still consumed before `None` is returned.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        no_prefix_error(parser);
        return None;
    };

    let mut left = nud_fn(parser);

    // Strictly greater, so equal binding powers associate to the left
    while parser.peek_token_kind() != TokenKind::Semicolon && bp < parser.peek_binding_power() {
        let Some(led_fn) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied() else {
            return left;
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        left = led_fn(parser, left, operator_bp);
    }

    left
}

fn no_prefix_error(parser: &mut Parser) {
    let token = parser.current_token();
    let error = ErrorImpl::NoPrefixParseFunction {
        token: token.literal.clone(),
        kind: token.kind,
    };
    let position = token.span.start.clone();
    parser.push_error(error, position);
}

pub fn parse_primary_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Identifier => Some(Expr::Identifier(IdentifierExpr {
            value: token.literal.clone(),
            token,
        })),
        TokenKind::Integer => match token.literal.parse::<i64>() {
            Ok(value) => Some(Expr::Integer(IntegerExpr { token, value })),
            Err(_) => {
                let position = token.span.start.clone();
                parser.push_error(ErrorImpl::IntegerParseError { token: token.literal }, position);
                None
            }
        },
        TokenKind::Float => match token.literal.parse::<f64>() {
            Ok(value) => Some(Expr::Float(FloatExpr { token, value })),
            Err(_) => {
                let position = token.span.start.clone();
                parser.push_error(ErrorImpl::FloatParseError { token: token.literal }, position);
                None
            }
        },
        TokenKind::True | TokenKind::False => Some(Expr::Boolean(BooleanExpr {
            value: token.kind == TokenKind::True,
            token,
        })),
        _ => {
            no_prefix_error(parser);
            None
        }
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Option<Expr>,
    bp: BindingPower,
) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    // The right side is parsed even when the left is missing
    let right = parse_expr(parser, bp)?;
    let left = left?;

    Some(Expr::Infix(InfixExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let rhs = parse_expr(parser, BindingPower::Prefix)?;

    Some(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator: operator_token,
        right_expr: Box::new(rhs),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest);

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    expr
}
