//! Error recovery for the parser.
//!
//! After a syntax error the declaration loop skips tokens until a likely
//! statement boundary. Membership tests use a bitset over `TokenKind`
//! discriminants.

use illi_ir::TokenKind;
use tracing::trace;

use crate::cursor::Cursor;

/// A set of token kinds, one bit per `TokenKind` discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.index()))
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.index())) != 0
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Keywords that begin a new statement.
pub const STMT_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Skip to the start of the next statement.
///
/// Always consumes the offending token first, then stops just after a `;`,
/// in front of a [`STMT_BOUNDARY`] keyword, or at `Eof`.
pub(crate) fn synchronize(cursor: &mut Cursor<'_>) {
    cursor.advance();

    let mut skipped = 1usize;
    while !cursor.is_at_end() {
        if cursor.previous().kind == TokenKind::Semicolon {
            break;
        }
        if STMT_BOUNDARY.contains(cursor.current_kind()) {
            break;
        }
        cursor.advance();
        skipped += 1;
    }

    trace!(skipped, line = cursor.current().line, "synchronized");
}
