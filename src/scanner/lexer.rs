use winnow::combinator::alt;
use winnow::error::ContextError;
use winnow::prelude::*;
use winnow::stream::{LocatingSlice, Location};
use winnow::token::{any, take_while};

use crate::scanner::token::{
    Span, Token, TokenKind, keyword_kind, single_char_kind, two_char_kind,
};

type Input<'a> = LocatingSlice<&'a str>;

fn whitespace(input: &mut Input<'_>) -> ModalResult<()> {
    // Tab is not in the language's whitespace set; it scans as an
    // illegal character.
    take_while(0.., |c: char| c == ' ' || c == '\n' || c == '\r')
        .void()
        .parse_next(input)
}

fn two_char_token<'a>(input: &mut Input<'a>) -> ModalResult<Token> {
    let start = input.current_token_start();
    let (kind, lexeme) = take_while(2..=2, |c: char| matches!(c, '=' | '!' | '>' | '<'))
        .verify_map(|s: &str| two_char_kind(s).map(|kind| (kind, s)))
        .parse_next(input)?;
    Ok(Token::new(kind, lexeme, Span::new(start, 2)))
}

fn single_char_token(input: &mut Input<'_>) -> ModalResult<Token> {
    let start = input.current_token_start();
    let (kind, c) = any
        .verify_map(|c: char| single_char_kind(c).map(|kind| (kind, c)))
        .parse_next(input)?;
    Ok(Token::new(kind, c.to_string(), Span::new(start, 1)))
}

fn identifier_or_keyword<'a>(input: &mut Input<'a>) -> ModalResult<Token> {
    let start = input.current_token_start();
    // Letters and underscore only; a digit ends the run.
    let lexeme: &str =
        take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_').parse_next(input)?;
    let kind = keyword_kind(lexeme).unwrap_or(TokenKind::Identifier);
    Ok(Token::new(kind, lexeme, Span::new(start, lexeme.len())))
}

fn number_literal<'a>(input: &mut Input<'a>) -> ModalResult<Token> {
    let start = input.current_token_start();
    let lexeme: &str =
        take_while(1.., |c: char| c.is_ascii_digit() || c == '.').parse_next(input)?;

    let kind = if lexeme.starts_with('.') || lexeme.ends_with('.') {
        TokenKind::Illegal
    } else {
        match lexeme.matches('.').count() {
            0 => TokenKind::Int,
            1 => TokenKind::Float,
            _ => TokenKind::Illegal,
        }
    };

    Ok(Token::new(kind, lexeme, Span::new(start, lexeme.len())))
}

fn scan_token<'a>(input: &mut Input<'a>) -> ModalResult<Token> {
    alt((
        two_char_token,
        single_char_token,
        identifier_or_keyword,
        number_literal,
    ))
    .parse_next(input)
}

/// Streaming tokenizer over a single source string. One instance makes one
/// left-to-right pass; construct a fresh one per input.
pub struct Scanner<'a> {
    input: Input<'a>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            input: LocatingSlice::new(source),
        }
    }

    /// Scan the next token, advancing past it. Once the input is exhausted
    /// this keeps returning the same `Eof` token on every call.
    pub fn next_token(&mut self) -> Token {
        let _ = whitespace(&mut self.input);

        let start = self.input.current_token_start();
        if self.input.is_empty() {
            return Token::new(TokenKind::Eof, "", Span::new(start, 0));
        }

        match scan_token(&mut self.input) {
            Ok(token) => token,
            Err(_) => {
                // Unrecognized character: emit it as an illegal token and
                // keep going. Consuming it guarantees progress.
                let c = any::<_, ContextError>
                    .parse_next(&mut self.input)
                    .unwrap_or('?');
                Token::new(TokenKind::Illegal, c.to_string(), Span::new(start, c.len_utf8()))
            }
        }
    }
}

/// Scan the whole source, returning every token up to and including the
/// single terminating `Eof`. Malformed lexemes come back as `Illegal`
/// tokens rather than errors.
pub fn scan_all(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = scanner.next_token();
        let at_eof = token.kind == TokenKind::Eof;
        tokens.push(token);
        if at_eof {
            break;
        }
    }

    tokens
}
