use crate::{
    ast::{
        ast::{Node, Stmt},
        statements::{BlockStmt, ExpressionStmt, IfAlternate, IfStmt, ReturnStmt},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    if let Some(stmt_fn) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

/// An expression followed by an optional terminator.
pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest);

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(Stmt::Expression(ExpressionStmt {
        token,
        expression: expression?,
    }))
}

/// `return <expr>`. A failed value still yields the statement, without a value.
pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest);

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    let end = match &value {
        Some(value) => value.get_span().end.clone(),
        None => token.span.end.clone(),
    };

    Some(Stmt::Return(ReturnStmt {
        span: Span {
            start: token.span.start.clone(),
            end,
        },
        token,
        value,
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Option<Stmt> {
    parse_if(parser).map(Stmt::If)
}

fn parse_if(parser: &mut Parser) -> Option<IfStmt> {
    let token = parser.advance();

    let condition = parse_expr(parser, BindingPower::Lowest);

    if !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }

    let consequence = parse_block_stmt(parser);

    let alternate = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();

        match parser.peek_token_kind() {
            TokenKind::OpenCurly => {
                parser.advance();
                Some(IfAlternate::Block(parse_block_stmt(parser)))
            }
            TokenKind::If => {
                parser.advance();
                Some(IfAlternate::If(Box::new(parse_if(parser)?)))
            }
            _ => {
                let peek = parser.peek_token();
                let error = ErrorImpl::MalformedElse {
                    token: peek.literal.clone(),
                };
                let position = peek.span.start.clone();
                parser.push_error(error, position);
                return None;
            }
        }
    } else {
        None
    };

    let end = match &alternate {
        Some(IfAlternate::Block(block)) => block.span.end.clone(),
        Some(IfAlternate::If(stmt)) => stmt.span.end.clone(),
        None => consequence.span.end.clone(),
    };

    // The whole statement is consumed before a missing condition drops it
    Some(IfStmt {
        span: Span {
            start: token.span.start.clone(),
            end,
        },
        token,
        condition: condition?,
        consequence,
        alternate,
    })
}

/// Parses statements up to the closing `}` or the end of input.
///
/// Starts on the `{` and stops on the `}`.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    let token = parser.current_token().clone();
    parser.advance();

    let mut body = Vec::new();
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        if let Some(stmt) = parse_stmt(parser) {
            body.push(stmt);
        }
        parser.advance();
    }

    BlockStmt {
        span: Span {
            start: token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token,
        body,
    }
}
