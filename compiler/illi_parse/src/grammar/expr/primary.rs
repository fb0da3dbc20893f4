//! Primary expressions.

use illi_diagnostic::ErrorCode;
use illi_ir::{Expr, Literal, Token, TokenKind, TokenLiteral};
use tracing::trace;

use crate::{ParseError, ParseResult, Parser};

/// Operand parser run after a binary operator with no left-hand side.
type OperandParser<'a, 's> = fn(&mut Parser<'a, 's>) -> ParseResult<Expr>;

impl<'a, 's> Parser<'a, 's> {
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Expr> {
        let token = self.cursor.current();

        if let Some(literal) = literal_of(token) {
            trace!(line = token.line, lexeme = %token.lexeme, "literal");
            self.cursor.advance();
            return Ok(Expr::Literal(literal));
        }

        if self.cursor.matches(&[TokenKind::Identifier]) {
            return Ok(Expr::Variable {
                name: self.cursor.previous().clone(),
            });
        }

        if self.cursor.matches(&[TokenKind::LeftParen]) {
            let inner = self.parse_expr()?;
            self.cursor.consume(
                TokenKind::RightParen,
                ErrorCode::E1001,
                "Expect ')' after expression.",
            )?;
            return Ok(Expr::grouping(inner));
        }

        if let Some(placeholder) = self.parse_missing_left_operand()? {
            return Ok(placeholder);
        }

        Err(self
            .cursor
            .error_at_current(ErrorCode::E1002, "Expect expression."))
    }

    /// Binary operator in operand position, as in `== 1` or `* 2`.
    ///
    /// Reports the operator, parses and discards the operand that would
    /// have been its right-hand side, and marks the current declaration
    /// malformed. Returns `None` if the current token is not such an
    /// operator.
    fn parse_missing_left_operand(&mut self) -> ParseResult<Option<Expr>> {
        let discard: OperandParser<'a, 's> = match self.cursor.current_kind() {
            TokenKind::BangEqual | TokenKind::EqualEqual => Parser::parse_equality,
            TokenKind::Greater
            | TokenKind::GreaterEqual
            | TokenKind::Less
            | TokenKind::LessEqual => Parser::parse_comparison,
            TokenKind::Plus | TokenKind::Star | TokenKind::Slash => Parser::parse_factor,
            _ => return Ok(None),
        };

        let operator = self.cursor.advance();
        self.report(&ParseError::new(
            ErrorCode::E1011,
            operator,
            "Missing left-hand operand.",
        ));
        self.malformed = true;

        discard(self)?;
        Ok(Some(Expr::Error))
    }
}

/// The literal value of a literal token, if it is one.
fn literal_of(token: &Token) -> Option<Literal> {
    match (token.kind, &token.literal) {
        (TokenKind::False, _) => Some(Literal::Bool(false)),
        (TokenKind::True, _) => Some(Literal::Bool(true)),
        (TokenKind::Nil, _) => Some(Literal::Nil),
        (TokenKind::Number, Some(TokenLiteral::Number(n))) => Some(Literal::Number(*n)),
        (TokenKind::String, Some(TokenLiteral::Str(s))) => Some(Literal::Str(s.clone())),
        _ => None,
    }
}
