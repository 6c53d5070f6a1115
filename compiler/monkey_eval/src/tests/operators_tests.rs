//! Tests for the infix and prefix operator implementations.

use monkey_ir::{InfixOp, PrefixOp};
use pretty_assertions::assert_eq;

use super::{eval, eval_error};
use crate::{evaluate_infix, evaluate_prefix, EvalErrorKind, Object, ObjectType};

#[test]
fn test_integer_operations() {
    let int = Object::Integer;
    assert_eq!(evaluate_infix(InfixOp::Add, &int(2), &int(3)), Ok(int(5)));
    assert_eq!(evaluate_infix(InfixOp::Sub, &int(5), &int(3)), Ok(int(2)));
    assert_eq!(evaluate_infix(InfixOp::Mul, &int(2), &int(3)), Ok(int(6)));
    assert_eq!(evaluate_infix(InfixOp::Div, &int(7), &int(2)), Ok(int(3)));
    assert_eq!(
        evaluate_infix(InfixOp::LtEq, &int(3), &int(3)),
        Ok(Object::TRUE)
    );
    assert_eq!(
        evaluate_infix(InfixOp::GtEq, &int(2), &int(3)),
        Ok(Object::FALSE)
    );
}

#[test]
fn test_integer_arithmetic_wraps() {
    let int = Object::Integer;
    assert_eq!(
        evaluate_infix(InfixOp::Add, &int(i64::MAX), &int(1)),
        Ok(int(i64::MIN))
    );
    assert_eq!(
        evaluate_infix(InfixOp::Mul, &int(i64::MIN), &int(-1)),
        Ok(int(i64::MIN))
    );
    assert_eq!(
        evaluate_infix(InfixOp::Div, &int(i64::MIN), &int(-1)),
        Ok(int(i64::MIN))
    );
    assert_eq!(evaluate_prefix(PrefixOp::Neg, &int(i64::MIN)), Ok(int(i64::MIN)));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        evaluate_infix(InfixOp::Div, &Object::Integer(10), &Object::Integer(0)),
        Err(EvalErrorKind::DivisionByZero { left: 10 })
    );
    assert_eq!(eval_error("let x = 5; x / (x - 5)"), "division by zero: 5 / 0");
}

#[test]
fn test_type_mismatch_precedes_equality() {
    assert_eq!(
        evaluate_infix(InfixOp::Eq, &Object::Integer(1), &Object::TRUE),
        Err(EvalErrorKind::TypeMismatch {
            left: ObjectType::Integer,
            operator: InfixOp::Eq,
            right: ObjectType::Boolean,
        })
    );
    assert_eq!(eval_error(r#""a" + 1"#), "type mismatch: STRING + INTEGER");
    assert_eq!(eval_error("[1] == 1"), "type mismatch: ARRAY == INTEGER");
}

#[test]
fn test_string_operations() {
    assert_eq!(
        evaluate_infix(InfixOp::Add, &Object::string("foo"), &Object::string("bar")),
        Ok(Object::string("foobar"))
    );
    assert_eq!(
        eval_error(r#""a" == "a""#),
        "unknown operator: STRING == STRING"
    );
    assert_eq!(eval_error(r#""a" < "b""#), "unknown operator: STRING < STRING");
}

#[test]
fn test_identity_equality_fallback() {
    let cases = [
        ("true == true", true),
        ("false != true", true),
        ("if (false) { 1 } == if (false) { 2 }", true),
        ("let a = [1]; a == a", true),
        ("[1] == [1]", false),
        ("let f = fn() { 1 }; f == f", true),
        ("fn() { 1 } == fn() { 1 }", false),
        ("len == len", true),
        ("len != first", true),
    ];

    for (source, expected) in cases {
        assert_eq!(eval(source), Object::from_bool(expected), "in {source:?}");
    }
}

#[test]
fn test_unsupported_same_type_operators() {
    assert_eq!(
        eval_error("true > false"),
        "unknown operator: BOOLEAN > BOOLEAN"
    );
    assert_eq!(eval_error("[1] + [2]"), "unknown operator: ARRAY + ARRAY");
    assert_eq!(
        eval_error("if (false) { 1 } + if (false) { 1 }"),
        "unknown operator: NULL + NULL"
    );
}

#[test]
fn test_prefix_operators() {
    assert_eq!(
        evaluate_prefix(PrefixOp::Not, &Object::NULL),
        Ok(Object::TRUE)
    );
    assert_eq!(
        evaluate_prefix(PrefixOp::Not, &Object::string("")),
        Ok(Object::FALSE)
    );
    assert_eq!(
        evaluate_prefix(PrefixOp::Neg, &Object::string("x")),
        Err(EvalErrorKind::UnknownPrefixOperator {
            operator: PrefixOp::Neg,
            operand: ObjectType::String,
        })
    );
    assert_eq!(eval_error("-[1]"), "unknown operator: -ARRAY");
}
