//! Recursive descent parser for Illi.
//!
//! [`parse`] turns a token stream into a list of statements. Syntax errors
//! are reported through an [`ErrorSink`]; the statement that contained the
//! error is left out of the result and parsing resumes at the next statement
//! boundary, so one run can report several errors.

mod cursor;
mod error;
mod grammar;
mod recovery;

use std::borrow::Cow;

use illi_diagnostic::ErrorSink;
use illi_ir::{Stmt, Token, TokenKind};
use tracing::debug;

use cursor::Cursor;
pub use error::ParseError;
pub use recovery::{TokenSet, STMT_BOUNDARY};

/// Result of a grammar production.
pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// Parser state.
pub struct Parser<'a, 's> {
    cursor: Cursor<'a>,
    sink: &'s mut dyn ErrorSink,
    /// Set when the declaration being parsed contains an `Expr::Error`
    /// or a recovered inner error.
    malformed: bool,
}

impl<'a, 's> Parser<'a, 's> {
    /// Create a parser over `tokens`, which must end with `Eof`.
    pub fn new(tokens: &'a [Token], sink: &'s mut dyn ErrorSink) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            sink,
            malformed: false,
        }
    }

    /// Parse declarations until end of input.
    pub fn parse_program(mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();

        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration_or_recover() {
                statements.push(stmt);
            }
        }

        debug!(count = statements.len(), "parsed program");
        statements
    }

    /// Parse one declaration, recovering from any error inside it.
    ///
    /// Returns `None` when the declaration was malformed. The enclosing
    /// declaration (if any) is marked malformed too, so a broken statement
    /// inside a block drops the whole top-level statement.
    fn declaration_or_recover(&mut self) -> Option<Stmt> {
        let outer = std::mem::replace(&mut self.malformed, false);
        let result = self.declaration();
        let inner = std::mem::replace(&mut self.malformed, outer);

        match result {
            Ok(stmt) if !inner => Some(stmt),
            Ok(_) => {
                debug!("dropping malformed statement");
                self.malformed = true;
                None
            }
            Err(error) => {
                self.report(&error);
                recovery::synchronize(&mut self.cursor);
                self.malformed = true;
                None
            }
        }
    }

    /// Report an error without aborting the current production.
    fn report(&mut self, error: &ParseError) {
        debug!(line = error.token.line, message = error.message, "syntax error");
        self.sink.report(error.to_diagnostic());
    }
}

/// Parse a token stream into statements.
///
/// Statements containing syntax errors are omitted; every error has been
/// reported through `sink` by the time this returns. A stream missing its
/// trailing `Eof` gets one appended.
pub fn parse(tokens: &[Token], sink: &mut dyn ErrorSink) -> Vec<Stmt> {
    let tokens: Cow<'_, [Token]> = match tokens.last() {
        Some(last) if last.kind == TokenKind::Eof => Cow::Borrowed(tokens),
        last => {
            let line = last.map_or(1, |token| token.line);
            let mut owned = tokens.to_vec();
            owned.push(Token::eof(line));
            Cow::Owned(owned)
        }
    };

    Parser::new(&tokens, sink).parse_program()
}

#[cfg(test)]
mod tests;
