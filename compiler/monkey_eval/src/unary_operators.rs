//! Unary operator implementations for the evaluator.

use monkey_ir::PrefixOp;

use crate::errors::{EvalErrorKind, EvalResult};
use crate::Object;

/// Evaluate `<operator><operand>`.
///
/// `!` works on any value through truthiness and never fails; `-` needs an
/// integer and wraps on `i64::MIN`.
pub fn evaluate_prefix(operator: PrefixOp, operand: &Object) -> EvalResult {
    match (operator, operand) {
        (PrefixOp::Not, _) => Ok(Object::from_bool(!operand.is_truthy())),
        (PrefixOp::Neg, Object::Integer(n)) => Ok(Object::Integer(n.wrapping_neg())),
        (PrefixOp::Neg, _) => Err(EvalErrorKind::UnknownPrefixOperator {
            operator,
            operand: operand.type_tag(),
        }),
    }
}
