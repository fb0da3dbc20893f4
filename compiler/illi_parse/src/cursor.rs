//! Token cursor for navigating the token stream.
//!
//! `matches`, `check`, `consume`, `previous` and `advance` are the only
//! ways the grammar moves through the tokens.

use illi_diagnostic::ErrorCode;
use illi_ir::{Token, TokenKind};
use tracing::trace;

use crate::{ParseError, ParseResult};

/// Cursor over a token slice that always ends with `Eof`.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token stream must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// The token under the cursor.
    ///
    /// Invariant: `pos` never moves past the trailing `Eof`.
    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// The most recently consumed token.
    ///
    /// Before anything is consumed this is the first token.
    #[inline]
    pub(crate) fn previous(&self) -> &'a Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Whether the current token is `kind`. Always false at end of input.
    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.current_kind() == kind
    }

    /// Consume the current token and return it. Stays put on `Eof`.
    pub(crate) fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            trace!(kind = ?token.kind, line = token.line, "advance");
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is one of `kinds`.
    pub(crate) fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind`, or fail at the current token.
    #[inline]
    pub(crate) fn consume(
        &mut self,
        kind: TokenKind,
        code: ErrorCode,
        message: &'static str,
    ) -> ParseResult<&'a Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(code, message))
        }
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn error_at_current(&self, code: ErrorCode, message: &'static str) -> ParseError {
        ParseError::new(code, self.current(), message)
    }
}
