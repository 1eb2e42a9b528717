use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A parse error with the position of the token that caused it.
///
/// Displays as the bare message, so a list of errors renders as the
/// human readable strings collected during a parse.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::NoPrefixParseFunction { .. } => "NoPrefixParseFunction",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::FloatParseError { .. } => "FloatParseError",
            ErrorImpl::MalformedElse { .. } => "MalformedElse",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::NoPrefixParseFunction { token, kind } => match kind {
                TokenKind::Illegal => {
                    ErrorTip::Suggestion(format!("`{}` is not a valid character", token))
                }
                TokenKind::Semicolon | TokenKind::EOF => {
                    ErrorTip::Suggestion(String::from("expected an expression"))
                }
                _ => ErrorTip::Suggestion(format!("`{}` cannot start an expression", token)),
            },
            ErrorImpl::UnexpectedToken { expected, .. } => {
                ErrorTip::Suggestion(format!("expected {} here", expected))
            }
            ErrorImpl::IntegerParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::FloatParseError { .. } => ErrorTip::None,
            ErrorImpl::MalformedElse { token } => {
                ErrorTip::Suggestion(format!("found `{}` after else", token))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("no prefix parse function for {token:?} [{kind}]")]
    NoPrefixParseFunction { token: String, kind: TokenKind },
    #[error("expected next token to be {expected}, got {received} instead")]
    UnexpectedToken {
        expected: TokenKind,
        received: TokenKind,
    },
    #[error("could not parse {token:?} as integer")]
    IntegerParseError { token: String },
    #[error("could not parse {token:?} as float")]
    FloatParseError { token: String },
    #[error("expected either a block statement or an if statement after else")]
    MalformedElse { token: String },
}
