//! Runtime errors.
//!
//! Operators fail with a bare [`EvalErrorKind`]; the interpreter attaches
//! the offending token to produce an [`EvalError`].

use illi_ir::Token;
use thiserror::Error;

use crate::Value;

/// What went wrong at runtime. `Display` is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("Operand must be a number")]
    OperandMustBeNumber,

    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers,

    #[error("Arithmetic division by 0")]
    DivisionByZero,

    #[error("Operands must be two numbers or at least one of them is string.")]
    InvalidAddOperands,

    #[error("Operands must be two numbers or two strings.")]
    InvalidComparisonOperands,

    #[error("Variable '{0}' might not have been initialized")]
    Uninitialized(String),

    #[error("Undefined variable '{0}'.")]
    UndefinedVariable(String),

    /// An `Expr::Error` placeholder reached evaluation.
    #[error("Cannot evaluate a malformed expression.")]
    MalformedExpression,
}

impl EvalErrorKind {
    /// Attach the token the error is reported at.
    #[cold]
    pub fn at(self, token: &Token) -> EvalError {
        EvalError {
            token: token.clone(),
            kind: self,
        }
    }
}

/// A runtime error at a specific token.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{kind}")]
pub struct EvalError {
    /// Operator or variable name the error is reported at.
    pub token: Token,
    pub kind: EvalErrorKind,
}

/// Result of evaluating an expression.
pub type EvalResult<T = Value> = Result<T, EvalError>;
