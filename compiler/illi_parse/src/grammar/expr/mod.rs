//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: entry point (`parse_expr`) and the binary precedence chain
//! - `operators.rs`: operator matching helpers
//! - `primary.rs`: literals, variables, grouping and the missing-operand
//!   error productions
//!
//! ```text
//! expression  -> comma
//! comma       -> assignment ("," assignment)*
//! assignment  -> conditional ("=" assignment)?
//! conditional -> equality ("?" expression ":" conditional)?
//! equality    -> comparison (("!=" | "==") comparison)*
//! comparison  -> term ((">" | ">=" | "<" | "<=") term)*
//! term        -> factor (("+" | "-") factor)*
//! factor      -> unary (("*" | "/") unary)*
//! unary       -> ("!" | "-") unary | primary
//! ```

mod operators;
mod primary;

use illi_diagnostic::ErrorCode;
use illi_ir::{Expr, TokenKind};
use illi_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseResult, Parser};

impl Parser<'_, '_> {
    /// Parse a full expression, including the comma operator.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    pub(crate) fn parse_expr(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.parse_comma())
    }

    /// Parse `a, b, c`; the value is the rightmost operand.
    fn parse_comma(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_assignment()?;

        while self.cursor.matches(&[TokenKind::Comma]) {
            let right = self.parse_assignment()?;
            left = Expr::comma(left, right);
        }

        Ok(left)
    }

    /// Parse an assignment (right-associative).
    ///
    /// Also the entry point for `var` initializers, where a comma belongs to
    /// the declaration list.
    pub(crate) fn parse_assignment(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.parse_assignment_inner())
    }

    fn parse_assignment_inner(&mut self) -> ParseResult<Expr> {
        let target = self.parse_conditional()?;

        if !self.cursor.matches(&[TokenKind::Equal]) {
            return Ok(target);
        }

        let equals = self.cursor.previous();
        let value = self.parse_assignment()?;

        if let Expr::Variable { name } = &target {
            return Ok(Expr::assign(name.clone(), value));
        }

        // Not fatal: the value is dropped and the target kept as is
        self.report(&ParseError::new(
            ErrorCode::E1010,
            equals,
            "Invalid assignment target.",
        ));
        Ok(target)
    }

    /// Parse `cond ? then : else` (right-associative in the else branch).
    fn parse_conditional(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.parse_conditional_inner())
    }

    fn parse_conditional_inner(&mut self) -> ParseResult<Expr> {
        let condition = self.parse_equality()?;

        if !self.cursor.matches(&[TokenKind::Question]) {
            return Ok(condition);
        }

        let then_branch = self.parse_expr()?;
        self.cursor.consume(
            TokenKind::Colon,
            ErrorCode::E1001,
            "Expect ':' after then branch of expression.",
        )?;
        let else_branch = self.parse_conditional()?;

        Ok(Expr::conditional(condition, then_branch, else_branch))
    }

    /// Parse `==` and `!=`.
    pub(crate) fn parse_equality(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_comparison()?;

        while let Some(op) = self.match_equality_op() {
            let operator = self.cursor.advance().clone();
            let right = self.parse_comparison()?;
            left = Expr::binary(left, op, operator, right);
        }

        Ok(left)
    }

    /// Parse `>`, `>=`, `<` and `<=`.
    pub(crate) fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;

        while let Some(op) = self.match_comparison_op() {
            let operator = self.cursor.advance().clone();
            let right = self.parse_term()?;
            left = Expr::binary(left, op, operator, right);
        }

        Ok(left)
    }

    /// Parse `+` and `-`.
    fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.match_additive_op() {
            let operator = self.cursor.advance().clone();
            let right = self.parse_factor()?;
            left = Expr::binary(left, op, operator, right);
        }

        Ok(left)
    }

    /// Parse `*` and `/`.
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_multiplicative_op() {
            let operator = self.cursor.advance().clone();
            let right = self.parse_unary()?;
            left = Expr::binary(left, op, operator, right);
        }

        Ok(left)
    }

    /// Parse prefix `-` and `!`.
    fn parse_unary(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.parse_unary_inner())
    }

    fn parse_unary_inner(&mut self) -> ParseResult<Expr> {
        if let Some(op) = self.match_unary_op() {
            let operator = self.cursor.advance().clone();
            let operand = self.parse_unary()?;
            return Ok(Expr::unary(op, operator, operand));
        }

        self.parse_primary()
    }
}
