//! Reserved-word table.
//!
//! Identifiers are scanned first and then checked here, so `variable` and
//! `printer` stay identifiers while `var` and `print` become keywords.

use illi_ir::TokenKind;

/// Look up a reserved word by exact text.
///
/// Returns `None` for ordinary identifiers. Matching is case-sensitive.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    // All reserved words are 2-6 ASCII lowercase letters.
    if !(2..=6).contains(&text.len()) {
        return None;
    }

    match text {
        "and" => Some(TokenKind::And),
        "class" => Some(TokenKind::Class),
        "else" => Some(TokenKind::Else),
        "false" => Some(TokenKind::False),
        "fun" => Some(TokenKind::Fun),
        "for" => Some(TokenKind::For),
        "if" => Some(TokenKind::If),
        "nil" => Some(TokenKind::Nil),
        "or" => Some(TokenKind::Or),
        "print" => Some(TokenKind::Print),
        "return" => Some(TokenKind::Return),
        "super" => Some(TokenKind::Super),
        "this" => Some(TokenKind::This),
        "true" => Some(TokenKind::True),
        "var" => Some(TokenKind::Var),
        "while" => Some(TokenKind::While),
        _ => None,
    }
}
