//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into tokens on demand for the parser. It handles:
//!
//! - Table-driven recognition of keywords, identifiers, numbers and operators
//! - Automatic statement terminator insertion at line ends
//! - Token position tracking for error reporting
//! - Illegal bytes, which become tokens instead of failing the lexer

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
