pub mod lexer;
pub mod token;

pub use lexer::{Scanner, scan_all};
pub use token::{Span, Token, TokenKind};

use crate::error::LexError;

/// Scan source text into a list of tokens, ending with a single `Eof`.
/// Never fails: malformed lexemes come back as `Illegal` tokens.
pub fn scan(source: &str) -> Vec<Token> {
    lexer::scan_all(source)
}

/// Build reportable diagnostics for the `Illegal` tokens of a scan.
pub fn lex_errors(name: &str, source: &str, tokens: &[Token]) -> Vec<LexError> {
    tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Illegal)
        .map(|t| LexError::illegal(&t.lexeme, t.span.offset, t.span.len).with_source_code(name, source))
        .collect()
}
