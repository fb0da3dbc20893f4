//! Unary operator implementations for the evaluator.

use illi_ir::UnaryOp;

use crate::{EvalErrorKind, Value};

/// Evaluate a unary operation on an already-evaluated operand.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> Result<Value, EvalErrorKind> {
    match (value, op) {
        (Value::Number(n), UnaryOp::Neg) => Ok(Value::Number(-n)),
        (_, UnaryOp::Neg) => Err(EvalErrorKind::OperandMustBeNumber),
        (_, UnaryOp::Not) => Ok(Value::Bool(!value.is_truthy())),
    }
}
