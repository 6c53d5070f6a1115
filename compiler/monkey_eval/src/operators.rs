//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the operand type set is closed, so a match
//! over `(left, right)` keeps every combination visible and exhaustive.

use std::rc::Rc;

use monkey_ir::InfixOp;

use crate::errors::{EvalErrorKind, EvalResult};
use crate::Object;

/// Evaluate `left <operator> right`.
///
/// Integers support arithmetic (wrapping) and comparison, strings support
/// `+` only, and every other same-type pair supports `==`/`!=` by
/// identity. Mixed types are a type mismatch.
pub fn evaluate_infix(operator: InfixOp, left: &Object, right: &Object) -> EvalResult {
    match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => eval_integer_infix(operator, *a, *b),
        _ if left.type_tag() != right.type_tag() => Err(EvalErrorKind::TypeMismatch {
            left: left.type_tag(),
            operator,
            right: right.type_tag(),
        }),
        (Object::String(a), Object::String(b)) if operator == InfixOp::Add => {
            Ok(Object::string(format!("{a}{b}")))
        }
        (Object::String(_), Object::String(_)) => Err(unknown_operator(operator, left, right)),
        _ => match operator {
            InfixOp::Eq => Ok(Object::from_bool(identical(left, right))),
            InfixOp::NotEq => Ok(Object::from_bool(!identical(left, right))),
            _ => Err(unknown_operator(operator, left, right)),
        },
    }
}

fn eval_integer_infix(operator: InfixOp, a: i64, b: i64) -> EvalResult {
    let value = match operator {
        InfixOp::Add => Object::Integer(a.wrapping_add(b)),
        InfixOp::Sub => Object::Integer(a.wrapping_sub(b)),
        InfixOp::Mul => Object::Integer(a.wrapping_mul(b)),
        InfixOp::Div => {
            if b == 0 {
                return Err(EvalErrorKind::DivisionByZero { left: a });
            }
            Object::Integer(a.wrapping_div(b))
        }
        InfixOp::Lt => Object::from_bool(a < b),
        InfixOp::LtEq => Object::from_bool(a <= b),
        InfixOp::Gt => Object::from_bool(a > b),
        InfixOp::GtEq => Object::from_bool(a >= b),
        InfixOp::Eq => Object::from_bool(a == b),
        InfixOp::NotEq => Object::from_bool(a != b),
    };
    Ok(value)
}

/// Identity comparison for the `==`/`!=` fallback.
///
/// Booleans and null compare by value (they behave as singletons);
/// functions and arrays by reference; built-ins by registered name.
fn identical(left: &Object, right: &Object) -> bool {
    match (left, right) {
        (Object::Boolean(a), Object::Boolean(b)) => a == b,
        (Object::Null, Object::Null) => true,
        (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
        (Object::Builtin(a), Object::Builtin(b)) => a.name == b.name,
        (Object::Array(a), Object::Array(b)) => a.ptr_eq(b),
        _ => false,
    }
}

#[cold]
fn unknown_operator(operator: InfixOp, left: &Object, right: &Object) -> EvalErrorKind {
    EvalErrorKind::UnknownInfixOperator {
        left: left.type_tag(),
        operator,
        right: right.type_tag(),
    }
}
