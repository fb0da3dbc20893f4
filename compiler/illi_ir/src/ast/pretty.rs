//! Parenthesized rendering of syntax trees.
//!
//! Used by parser tests and parser debug logging. Operator nodes print
//! prefix-first so precedence and associativity are visible at a glance,
//! e.g. `(+ 1.0 (* 2.0 3.0))`.

use std::fmt;

use super::{Expr, Literal, Stmt, VarDecl};

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n:?}"),
            Literal::Str(s) => write!(f, "{s:?}"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Nil => f.write_str("nil"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => write!(f, "{literal}"),
            Expr::Grouping(inner) => write!(f, "(group {inner})"),
            Expr::Unary { op, operand, .. } => write!(f, "({} {operand})", op.as_symbol()),
            Expr::Binary {
                left, op, right, ..
            } => write!(f, "({} {left} {right})", op.as_symbol()),
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => write!(f, "(?: {condition} {then_branch} {else_branch})"),
            Expr::Comma { left, right } => write!(f, "(, {left} {right})"),
            Expr::Variable { name } => f.write_str(&name.lexeme),
            Expr::Assign { name, value } => write!(f, "(= {} {value})", name.lexeme),
            Expr::Error => f.write_str("<error>"),
        }
    }
}

impl fmt::Display for VarDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.initializer {
            Some(init) => write!(f, "(var {} {init})", self.name.lexeme),
            None => write!(f, "(var {})", self.name.lexeme),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expression(expr) => write!(f, "(; {expr})"),
            Stmt::Print(expr) => write!(f, "(print {expr})"),
            Stmt::Var(decl) => write!(f, "{decl}"),
            Stmt::Vars(decls) => {
                f.write_str("(vars")?;
                for decl in decls {
                    write!(f, " {decl}")?;
                }
                f.write_str(")")
            }
            Stmt::Block(body) => {
                f.write_str("(block")?;
                for stmt in body {
                    write!(f, " {stmt}")?;
                }
                f.write_str(")")
            }
        }
    }
}
