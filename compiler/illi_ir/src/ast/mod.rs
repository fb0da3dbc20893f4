//! Syntax tree for Illi programs.
//!
//! Two closed sum types, `Expr` and `Stmt`, matched exhaustively by the
//! evaluator. Children are boxed and owned by exactly one parent.

mod expr;
mod operators;
mod pretty;
mod stmt;

pub use expr::{Expr, Literal};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Stmt, VarDecl};

#[cfg(test)]
mod tests;
