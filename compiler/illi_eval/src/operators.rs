//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the operator set and the value types are
//! both closed, so a match covers every case.

use std::cmp::Ordering;

use illi_ir::BinaryOp;

use crate::{EvalErrorKind, Value};

/// Evaluate a binary operation on already-evaluated operands.
///
/// The caller attaches the operator token to any error.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Add => eval_add(left, right),
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => eval_arithmetic(&left, &right, op),
        BinaryOp::Greater | BinaryOp::GreaterEq | BinaryOp::Less | BinaryOp::LessEq => {
            eval_comparison(&left, &right, op)
        }
    }
}

/// `+`: numeric addition, or concatenation if either side is a string.
fn eval_add(left: Value, right: Value) -> Result<Value, EvalErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(mut a), b) => {
            a.push_str(&b.to_string());
            Ok(Value::Str(a))
        }
        (a, Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
        _ => Err(EvalErrorKind::InvalidAddOperands),
    }
}

/// `-`, `*`, `/` on two numbers.
fn eval_arithmetic(left: &Value, right: &Value, op: BinaryOp) -> Result<Value, EvalErrorKind> {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(EvalErrorKind::OperandsMustBeNumbers);
    };
    let result = match op {
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if *b == 0.0 {
                return Err(EvalErrorKind::DivisionByZero);
            }
            a / b
        }
        _ => unreachable!("eval_arithmetic called with {op:?}"),
    };
    Ok(Value::Number(result))
}

/// Ordering comparisons: numbers numerically, strings lexicographically.
fn eval_comparison(left: &Value, right: &Value, op: BinaryOp) -> Result<Value, EvalErrorKind> {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => return Err(EvalErrorKind::InvalidComparisonOperands),
    };

    // `None` only for NaN operands, where every comparison is false
    let result = ordering.is_some_and(|ordering| match op {
        BinaryOp::Greater => ordering == Ordering::Greater,
        BinaryOp::GreaterEq => ordering != Ordering::Less,
        BinaryOp::Less => ordering == Ordering::Less,
        BinaryOp::LessEq => ordering != Ordering::Greater,
        _ => unreachable!("eval_comparison called with {op:?}"),
    });
    Ok(Value::Bool(result))
}
