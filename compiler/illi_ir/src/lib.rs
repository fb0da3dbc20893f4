//! Illi IR - tokens and syntax trees.
//!
//! This crate holds the data shared by every phase of the interpreter:
//! - `Token` / `TokenKind` produced by the lexer
//! - `Expr` / `Stmt` produced by the parser and walked by the evaluator
//!
//! Everything here is plain data. Behaviour lives in `illi_lexer`,
//! `illi_parse` and `illi_eval`.

pub mod ast;
mod token;

pub use ast::{BinaryOp, Expr, Literal, Stmt, UnaryOp, VarDecl};
pub use token::{Token, TokenKind, TokenLiteral};
