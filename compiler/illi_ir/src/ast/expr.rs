//! Expression nodes.

use super::{BinaryOp, UnaryOp};
use crate::Token;

/// A literal value written in the source.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Number(f64),
    Str(String),
    Bool(bool),
    Nil,
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// `42`, `"text"`, `true`, `nil`
    Literal(Literal),

    /// `( inner )`
    Grouping(Box<Expr>),

    /// `-operand`, `!operand`
    Unary {
        op: UnaryOp,
        operator: Token,
        operand: Box<Expr>,
    },

    /// `left op right`
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        operator: Token,
        right: Box<Expr>,
    },

    /// `condition ? then_branch : else_branch`
    Conditional {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },

    /// `left, right`
    Comma { left: Box<Expr>, right: Box<Expr> },

    /// `name`
    Variable { name: Token },

    /// `name = value`
    Assign { name: Token, value: Box<Expr> },

    /// Parse error placeholder for an operator with no left-hand operand.
    ///
    /// The parser drops any statement containing one, so it never reaches
    /// the evaluator through `illi_parse::parse`.
    Error,
}

impl Expr {
    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn unary(op: UnaryOp, operator: Token, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, op: BinaryOp, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            operator,
            right: Box::new(right),
        }
    }

    pub fn conditional(condition: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::Conditional {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn comma(left: Expr, right: Expr) -> Self {
        Expr::Comma {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn assign(name: Token, value: Expr) -> Self {
        Expr::Assign {
            name,
            value: Box::new(value),
        }
    }

    /// Whether this node has no boxed children.
    fn is_leaf(&self) -> bool {
        matches!(
            self,
            Expr::Literal(_) | Expr::Variable { .. } | Expr::Error
        )
    }

    /// Move every non-leaf child onto `pending`, leaving `Error` behind.
    fn detach_children(&mut self, pending: &mut Vec<Expr>) {
        let mut detach = |child: &mut Box<Expr>| {
            if !child.is_leaf() {
                pending.push(std::mem::replace(&mut **child, Expr::Error));
            }
        };
        match self {
            Expr::Literal(_) | Expr::Variable { .. } | Expr::Error => {}
            Expr::Grouping(inner) => detach(inner),
            Expr::Unary { operand, .. } => detach(operand),
            Expr::Assign { value, .. } => detach(value),
            Expr::Binary { left, right, .. } | Expr::Comma { left, right } => {
                detach(left);
                detach(right);
            }
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                detach(condition);
                detach(then_branch);
                detach(else_branch);
            }
        }
    }
}

/// Tears the tree down with a work list so that dropping a deeply nested
/// expression uses constant stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}
