//! Parse error type.

use illi_diagnostic::{Diagnostic, ErrorCode, Location};
use illi_ir::{Token, TokenKind};
use thiserror::Error;

/// A syntax error at a specific token.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message}")]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// The token the parser rejected.
    pub token: Token,
    pub message: &'static str,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, token: &Token, message: &'static str) -> Self {
        ParseError {
            code,
            token: token.clone(),
            message,
        }
    }

    /// Convert to a diagnostic pointing at the rejected token.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let location = if self.token.kind == TokenKind::Eof {
            Location::AtEnd
        } else {
            Location::AtLexeme(self.token.lexeme.clone())
        };
        Diagnostic::new(self.code, self.token.line, self.message).with_location(location)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn eof_renders_at_end() {
        let err = ParseError::new(ErrorCode::E1002, &Token::eof(4), "Expect expression.");
        assert_eq!(
            err.to_diagnostic().to_string(),
            "[line 4] Error at end: Expect expression."
        );
    }

    #[test]
    fn other_tokens_render_their_lexeme() {
        let token = Token::simple(TokenKind::RightParen, ")", 2);
        let err = ParseError::new(ErrorCode::E1002, &token, "Expect expression.");
        assert_eq!(
            err.to_diagnostic().to_string(),
            "[line 2] Error at ')': Expect expression."
        );
    }
}
