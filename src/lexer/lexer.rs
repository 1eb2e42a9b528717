use std::rc::Rc;

use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Token;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Two character operators must come before their one character prefixes
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_]+").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]*)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
    ];
}

/// Token kinds after which a newline or the end of input terminates the statement.
const CLOSING_KINDS: [TokenKind; 7] = [
    TokenKind::Identifier,
    TokenKind::Integer,
    TokenKind::Float,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Return,
    TokenKind::CloseParen,
];

/// Pull-based lexer. Produces one token per `next_token` call and inserts
/// statement terminators at line ends.
pub struct Lexer {
    source: String,
    pos: usize,
    prev_token: Option<Token>,
    file: Rc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            prev_token: None,
            file: file_name,
            finished: false,
        }
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// The byte under the cursor, `None` at the end of input.
    pub fn at(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    pub fn remainder(&self) -> &[u8] {
        self.source.as_bytes().get(self.pos..).unwrap_or_default()
    }

    /// Span of the next `len` bytes starting at the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn next_token(&mut self) -> Token {
        let token = loop {
            self.skip_whitespace();

            match self.at() {
                None => {
                    if self.should_insert_semicolon() {
                        break self.synthesize_semicolon(0);
                    }
                    break MK_TOKEN!(TokenKind::EOF, String::new(), self.span_of(0));
                }
                Some(b'\n') => {
                    if self.should_insert_semicolon() {
                        let token = self.synthesize_semicolon(1);
                        self.advance_n(1);
                        break token;
                    }
                    self.advance_n(1);
                }
                Some(byte) => break self.match_pattern(byte),
            }
        };

        self.prev_token = Some(token.clone());
        token
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.at(), Some(b' ' | b'\t' | b'\r')) {
            self.advance_n(1);
        }
    }

    fn should_insert_semicolon(&self) -> bool {
        match &self.prev_token {
            Some(token) => token.is_one_of_many(&CLOSING_KINDS),
            None => false,
        }
    }

    fn synthesize_semicolon(&self, width: usize) -> Token {
        MK_TOKEN!(TokenKind::Semicolon, String::from(";"), self.span_of(width))
    }

    fn match_pattern(&mut self, byte: u8) -> Token {
        for pattern in PATTERNS.iter() {
            if pattern.regex.is_match(self.remainder()) {
                return (pattern.handler)(self, &pattern.regex);
            }
        }

        // Bytes above 0x7f are widened to a char, so the literal is the UTF-8
        // encoding of that char rather than the single byte consumed
        let span = self.span_of(1);
        self.advance_n(1);
        MK_TOKEN!(TokenKind::Illegal, (byte as char).to_string(), span)
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
            .unwrap_or_default()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to and including the first end-of-input token.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.finished = true;
        }

        Some(token)
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Token {
    let literal = lexer.matched(regex);
    let kind = if literal.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Integer
    };

    let span = lexer.span_of(literal.len());
    lexer.advance_n(literal.len());
    MK_TOKEN!(kind, literal, span)
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Token {
    let literal = lexer.matched(regex);
    let kind = RESERVED_LOOKUP
        .get(literal.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let span = lexer.span_of(literal.len());
    lexer.advance_n(literal.len());
    MK_TOKEN!(kind, literal, span)
}

/// Collects the whole token stream of `source`, ending with the EOF token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    Lexer::new(source, file).collect()
}
