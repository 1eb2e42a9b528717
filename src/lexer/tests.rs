//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer and float literals
//! - Operators and delimiters
//! - Statement terminator insertion at newlines and end of input
//! - Illegal bytes

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), None)
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("if else return true false\n".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[1].kind, TokenKind::Else);
    assert_eq!(tokens[2].kind, TokenKind::Return);
    assert_eq!(tokens[3].kind, TokenKind::True);
    assert_eq!(tokens[4].kind, TokenKind::False);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 7);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo _bar CamelCase iffy".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].literal, "_bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].literal, "CamelCase");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].literal, "iffy");
}

#[test]
fn test_identifiers_stop_at_digits() {
    let tokens = tokenize("abc123".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "abc");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].literal, "123");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100. 7".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].literal, "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].literal, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].literal, "0");
    assert_eq!(tokens[3].kind, TokenKind::Float);
    assert_eq!(tokens[3].literal, "100.");
    assert_eq!(tokens[4].kind, TokenKind::Integer);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("= == ! != + - * / < >"),
        vec![
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::Not,
            TokenKind::NotEquals,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_two_character_operator_literals() {
    let tokens = tokenize("a==b!=c=!d".to_string(), None);
    let literals = tokens
        .iter()
        .map(|token| token.literal.as_str())
        .collect::<Vec<&str>>();

    assert_eq!(literals, vec!["a", "==", "b", "!=", "c", "=", "!", "d", ";", ""]);
}

#[test]
fn test_tokenize_delimiters() {
    assert_eq!(
        kinds("( ) { } , ;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_semicolon_inserted_after_expression_line() {
    assert_eq!(
        kinds("3 + 4\n-5"),
        vec![
            TokenKind::Integer,
            TokenKind::Plus,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Dash,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_no_semicolon_after_operator_line() {
    assert_eq!(
        kinds("a +\nb"),
        vec![
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_semicolon_after_each_closing_kind() {
    for source in ["x\n", "1\n", "1.5\n", "true\n", "false\n", "return\n", "()\n"] {
        let tokens = tokenize(source.to_string(), None);
        let last = &tokens[tokens.len() - 2];

        assert_eq!(last.kind, TokenKind::Semicolon, "source: {:?}", source);
        assert_eq!(last.literal, ";");
    }
}

#[test]
fn test_no_semicolon_after_braces_or_commas() {
    assert_eq!(
        kinds("{\n}\n,\n"),
        vec![
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_no_semicolon_at_start_of_input() {
    assert_eq!(kinds("\n\n\nx"), vec![TokenKind::Identifier, TokenKind::Semicolon, TokenKind::EOF]);
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("\n \t\r\n"), vec![TokenKind::EOF]);
}

#[test]
fn test_blank_lines_insert_one_semicolon() {
    assert_eq!(
        kinds("a\n\n\n\nb"),
        vec![
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_explicit_semicolon_is_not_doubled() {
    assert_eq!(
        kinds("a;\nb;"),
        vec![
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_illegal_bytes() {
    let tokens = tokenize("5 @ #".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "@");
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].literal, "#");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_non_ascii_bytes_are_illegal() {
    let tokens = tokenize("é".to_string(), None);

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].kind, TokenKind::EOF);

    // Each byte of the two byte sequence becomes its own char literal
    assert_eq!(tokens[0].literal, "\u{c3}");
    assert_eq!(tokens[1].literal, "\u{a9}");
    assert_eq!(tokens[0].span.end.0 - tokens[0].span.start.0, 1);
    assert_eq!(tokens[0].literal.len(), 2);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("foo == 12\n".to_string(), Some("test.lemon".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 6);
    assert_eq!(tokens[2].span.start.0, 7);
    assert_eq!(tokens[2].span.end.0, 9);
    assert_eq!(tokens[3].span.start.0, 9);
    assert_eq!(*tokens[0].span.start.1, "test.lemon");
}

#[test]
fn test_default_file_name() {
    let lexer = Lexer::new(String::from("x"), None);
    assert_eq!(*lexer.file(), "shell");
}

#[test]
fn test_eof_repeats_after_end() {
    let mut lexer = Lexer::new(String::from("x"), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_iterator_stops_after_eof() {
    let mut lexer = Lexer::new(String::from("1 + 2"), None);

    let collected = lexer.by_ref().collect::<Vec<_>>();
    assert_eq!(collected.last().unwrap().kind, TokenKind::EOF);
    assert!(lexer.next().is_none());
}
