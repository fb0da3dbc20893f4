//! Lexer for Illi using logos.
//!
//! [`lex`] turns source text into a `Vec<Token>` ending in `Eof`. It never
//! fails: unexpected characters, unterminated strings and illegal escapes are
//! reported through an [`ErrorSink`] and scanning carries on after them.

mod escape;
mod keywords;

pub use escape::{cook_string, InvalidEscape};

use illi_diagnostic::{Diagnostic, ErrorCode, ErrorSink};
use illi_ir::{Token, TokenKind, TokenLiteral};
use logos::Logos;
use tracing::debug;

/// How a string literal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringEnd {
    Closed,
    Unterminated,
}

/// Raw token from logos (before keyword resolution and cooking).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
enum RawToken {
    #[regex(r"//[^\n\r]*")]
    LineComment,

    #[token("\n")]
    Newline,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[token("!=")]
    BangEq,
    #[token("!")]
    Bang,
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,

    // Integer-looking number; `1.` stays `1` followed by `.`
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Int(f64),

    // Fractional number; digits required on both sides of the dot
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Float(f64),

    // String literal; the body is consumed by `scan_string`
    #[token("\"", scan_string)]
    String(StringEnd),

    // Identifier or reserved word
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Consume a string body after its opening quote.
///
/// A backslash always swallows the next character, so `\"` does not close
/// the literal. Stops after the closing quote or at end of input.
fn scan_string(lex: &mut logos::Lexer<RawToken>) -> StringEnd {
    let rest = lex.remainder();
    let mut escaped = false;

    for (offset, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => {
                lex.bump(offset + 1);
                return StringEnd::Closed;
            }
            _ => {}
        }
    }

    lex.bump(rest.len());
    StringEnd::Unterminated
}

/// Number of newlines inside a lexeme.
#[inline]
fn count_newlines(text: &str) -> u32 {
    let count = text.bytes().filter(|&b| b == b'\n').count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Lex source code into tokens.
///
/// The result always ends with an `Eof` token carrying the final line
/// number, even when errors were reported.
pub fn lex(source: &str, sink: &mut dyn ErrorSink) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut line: u32 = 1;
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::LineComment) => {}
            Ok(RawToken::Newline) => line += 1,
            Ok(RawToken::String(end)) => {
                let start_line = line;
                line += count_newlines(slice);
                if let Some(token) = string_token(slice, end, start_line, line, sink) {
                    tokens.push(token);
                }
            }
            Ok(raw) => tokens.push(convert_token(raw, slice, line)),
            Err(()) => {
                debug!(line, slice, "unexpected character");
                sink.report(Diagnostic::new(
                    ErrorCode::E0002,
                    line,
                    "Unexpected character.",
                ));
            }
        }
    }

    tokens.push(Token::eof(line));
    tokens
}

/// Build the token for a scanned string literal, or report why there is none.
///
/// Errors are reported on `end_line`, where scanning stopped; the token
/// itself carries `start_line`.
fn string_token(
    slice: &str,
    end: StringEnd,
    start_line: u32,
    end_line: u32,
    sink: &mut dyn ErrorSink,
) -> Option<Token> {
    if end == StringEnd::Unterminated {
        debug!(line = end_line, "unterminated string");
        sink.report(Diagnostic::new(
            ErrorCode::E0001,
            end_line,
            "Unterminated string.",
        ));
        return None;
    }

    let body = &slice[1..slice.len() - 1];
    match cook_string(body) {
        Ok(cooked) => Some(Token::new(
            TokenKind::String,
            slice,
            Some(TokenLiteral::Str(cooked)),
            start_line,
        )),
        Err(InvalidEscape { found }) => {
            debug!(line = end_line, ?found, "illegal escape");
            sink.report(Diagnostic::new(
                ErrorCode::E0005,
                end_line,
                "Illegal escape character in string literal.",
            ));
            None
        }
    }
}

/// Convert a raw token to a `Token`, resolving keywords.
fn convert_token(raw: RawToken, slice: &str, line: u32) -> Token {
    let kind = match raw {
        RawToken::Int(n) | RawToken::Float(n) => {
            return Token::new(TokenKind::Number, slice, Some(TokenLiteral::Number(n)), line);
        }
        RawToken::Ident => keywords::lookup(slice).unwrap_or(TokenKind::Identifier),

        RawToken::LParen => TokenKind::LeftParen,
        RawToken::RParen => TokenKind::RightParen,
        RawToken::LBrace => TokenKind::LeftBrace,
        RawToken::RBrace => TokenKind::RightBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Question => TokenKind::Question,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,

        RawToken::BangEq => TokenKind::BangEqual,
        RawToken::Bang => TokenKind::Bang,
        RawToken::EqEq => TokenKind::EqualEqual,
        RawToken::Eq => TokenKind::Equal,
        RawToken::GtEq => TokenKind::GreaterEqual,
        RawToken::Gt => TokenKind::Greater,
        RawToken::LtEq => TokenKind::LessEqual,
        RawToken::Lt => TokenKind::Less,

        // Handled by `lex` before conversion
        RawToken::LineComment | RawToken::Newline | RawToken::String(_) => {
            unreachable!("trivia and strings are handled in lex")
        }
    };
    Token::simple(kind, slice, line)
}
