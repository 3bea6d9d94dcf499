use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
pub enum TokenKind {
    // Single-character tokens
    #[strum(serialize = "(")]
    LeftParen,
    #[strum(serialize = ")")]
    RightParen,
    #[strum(serialize = "{{")]
    LeftBrace,
    #[strum(serialize = "}}")]
    RightBrace,
    #[strum(serialize = "|")]
    Pipe,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "*")]
    Star,
    #[strum(serialize = "/")]
    Slash,
    #[strum(serialize = ",")]
    Comma,

    // One or two character tokens
    #[strum(serialize = "!")]
    Bang,
    #[strum(serialize = "!=")]
    BangEqual,
    #[strum(serialize = "=")]
    Equal,
    #[strum(serialize = "==")]
    EqualEqual,
    #[strum(serialize = ">")]
    Greater,
    #[strum(serialize = ">=")]
    GreaterEqual,
    #[strum(serialize = "<")]
    Less,
    #[strum(serialize = "<=")]
    LessEqual,

    // Literals
    #[strum(serialize = "IDENTIFIER")]
    Identifier,
    #[strum(serialize = "INT")]
    Int,
    #[strum(serialize = "FLOAT")]
    Float,

    // Keywords
    #[strum(serialize = "DATE")]
    Date,
    #[strum(serialize = "AND")]
    And,
    #[strum(serialize = "OR")]
    Or,
    #[strum(serialize = "IF")]
    If,
    #[strum(serialize = "ELSE")]
    Else,
    #[strum(serialize = "TRUE")]
    True,
    #[strum(serialize = "FALSE")]
    False,

    #[strum(serialize = "ILLEGAL")]
    Illegal,
    #[strum(serialize = "EOF")]
    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.offset.into(), span.len)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} '{}' @{}", self.kind, self.lexeme, self.span.offset)
    }
}

/// Single-character punctuation and operators.
pub fn single_char_kind(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::LeftParen),
        ')' => Some(TokenKind::RightParen),
        '{' => Some(TokenKind::LeftBrace),
        '}' => Some(TokenKind::RightBrace),
        '|' => Some(TokenKind::Pipe),
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Minus),
        '*' => Some(TokenKind::Star),
        '/' => Some(TokenKind::Slash),
        ',' => Some(TokenKind::Comma),
        '!' => Some(TokenKind::Bang),
        '=' => Some(TokenKind::Equal),
        '<' => Some(TokenKind::Less),
        '>' => Some(TokenKind::Greater),
        _ => None,
    }
}

/// Two-character comparison operators. Only `=`, `!`, `>` and `<` can start one.
pub fn two_char_kind(lexeme: &str) -> Option<TokenKind> {
    match lexeme {
        "==" => Some(TokenKind::EqualEqual),
        "!=" => Some(TokenKind::BangEqual),
        ">=" => Some(TokenKind::GreaterEqual),
        "<=" => Some(TokenKind::LessEqual),
        _ => None,
    }
}

/// Reserved words, matched by exact spelling.
pub fn keyword_kind(ident: &str) -> Option<TokenKind> {
    match ident {
        "DATE" => Some(TokenKind::Date),
        "AND" => Some(TokenKind::And),
        "OR" => Some(TokenKind::Or),
        "IF" => Some(TokenKind::If),
        "ELSE" => Some(TokenKind::Else),
        "TRUE" => Some(TokenKind::True),
        "FALSE" => Some(TokenKind::False),
        _ => None,
    }
}
