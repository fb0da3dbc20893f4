//! Declarations and statements.
//!
//! ```text
//! declaration -> "var" varDecls | statement
//! varDecls    -> varDecl ("," varDecl)* ";"
//! varDecl     -> IDENTIFIER ("=" assignment)?
//! statement   -> "print" expression ";" | block | exprStmt
//! block       -> "{" declaration* "}"
//! exprStmt    -> expression ";"
//! ```

use illi_diagnostic::ErrorCode;
use illi_ir::{Stmt, TokenKind, VarDecl};
use illi_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseResult, Parser};

impl Parser<'_, '_> {
    pub(crate) fn declaration(&mut self) -> ParseResult<Stmt> {
        if self.cursor.matches(&[TokenKind::Var]) {
            return self.var_declarations();
        }
        self.statement()
    }

    /// One or more comma-separated declarations sharing a `var`.
    ///
    /// A single declaration yields `Stmt::Var`, several yield `Stmt::Vars`.
    fn var_declarations(&mut self) -> ParseResult<Stmt> {
        let mut decls = vec![self.var_declaration()?];
        while self.cursor.matches(&[TokenKind::Comma]) {
            decls.push(self.var_declaration()?);
        }
        self.cursor
            .consume(TokenKind::Semicolon, ErrorCode::E1001, "';' Expected")?;

        trace!(count = decls.len(), "var declarations");
        match <[VarDecl; 1]>::try_from(decls) {
            Ok([decl]) => Ok(Stmt::Var(decl)),
            Err(decls) => Ok(Stmt::Vars(decls)),
        }
    }

    fn var_declaration(&mut self) -> ParseResult<VarDecl> {
        let name = self
            .cursor
            .consume(
                TokenKind::Identifier,
                ErrorCode::E1004,
                "Expect variable name.",
            )?
            .clone();

        // `assignment`, not `expression`: a comma here starts the next declaration
        let initializer = if self.cursor.matches(&[TokenKind::Equal]) {
            Some(self.parse_assignment()?)
        } else {
            None
        };

        Ok(VarDecl { name, initializer })
    }

    fn statement(&mut self) -> ParseResult<Stmt> {
        if self.cursor.matches(&[TokenKind::Print]) {
            return self.print_statement();
        }
        if self.cursor.matches(&[TokenKind::LeftBrace]) {
            return ensure_sufficient_stack(|| self.block());
        }
        self.expression_statement()
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let value = self.parse_expr()?;
        self.cursor.consume(
            TokenKind::Semicolon,
            ErrorCode::E1001,
            "Expected ';' after value.",
        )?;
        Ok(Stmt::Print(value))
    }

    /// Body of a block; the `{` has been consumed.
    ///
    /// Errors inside the body are recovered here so that later statements
    /// in the block are still checked.
    fn block(&mut self) -> ParseResult<Stmt> {
        let mut statements = Vec::new();

        while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration_or_recover() {
                statements.push(stmt);
            }
        }

        self.cursor.consume(
            TokenKind::RightBrace,
            ErrorCode::E1001,
            "Expected '}' after block statement.",
        )?;
        Ok(Stmt::Block(statements))
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.parse_expr()?;
        self.cursor.consume(
            TokenKind::Semicolon,
            ErrorCode::E1001,
            "Expected ';' after expression.",
        )?;
        Ok(Stmt::Expression(expr))
    }
}
