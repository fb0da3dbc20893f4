//! Statement nodes.

use super::Expr;
use crate::Token;

/// One `name (= initializer)?` entry of a `var` declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct VarDecl {
    pub name: Token,
    pub initializer: Option<Expr>,
}

/// Statement node. A program is a `Vec<Stmt>`.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `expr;`
    Expression(Expr),
    /// `print expr;`
    Print(Expr),
    /// `var a = 1;`
    Var(VarDecl),
    /// `var a = 1, b, c = a;`
    Vars(Vec<VarDecl>),
    /// `{ ... }`
    Block(Vec<Stmt>),
}

/// Flattens nested blocks before dropping them. Expressions inside already
/// drop iteratively.
impl Drop for Stmt {
    fn drop(&mut self) {
        let Stmt::Block(body) = self else {
            return;
        };
        let mut pending = std::mem::take(body);
        while let Some(mut stmt) = pending.pop() {
            if let Stmt::Block(inner) = &mut stmt {
                pending.append(inner);
            }
        }
    }
}
