//! Runtime error kinds.
//!
//! Every runtime error message comes from the `Display` of an
//! `EvalErrorKind`. Inside the evaluator they travel as `EvalResult`
//! errors; at the evaluation boundary they become `Object::Error` values
//! and from then on propagate like any other object.

use monkey_ir::{InfixOp, PrefixOp};

use crate::{Object, ObjectType};

/// Result of an operation that may raise a runtime error.
pub type EvalResult = Result<Object, EvalErrorKind>;

/// A runtime error.
///
/// The `Display` text is the message carried by `Object::Error`, so it is
/// exactly what the user sees after `ERROR: `.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: ObjectType,
        operator: InfixOp,
        right: ObjectType,
    },

    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        operator: PrefixOp,
        operand: ObjectType,
    },

    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: ObjectType,
        operator: InfixOp,
        right: ObjectType,
    },

    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },

    #[error("not a function: got={got}")]
    NotAFunction { got: ObjectType },

    #[error("division by zero: {left} / 0")]
    DivisionByZero { left: i64 },

    #[error("wrong number of arguments: want={want}, got={got}")]
    WrongArgumentCount { want: usize, got: usize },

    #[error("index operator not supported: {left}[{index}]")]
    IndexNotSupported { left: ObjectType, index: ObjectType },

    #[error("argument to `{builtin}` not supported, got {got}")]
    UnsupportedArgument {
        builtin: &'static str,
        got: ObjectType,
    },

    #[error("argument to `{builtin}` must be ARRAY, got {got}")]
    ExpectedArray {
        builtin: &'static str,
        got: ObjectType,
    },

    #[error("cannot pop from an empty array")]
    PopFromEmpty,

    #[error("maximum call depth exceeded: {limit}")]
    CallDepthExceeded { limit: usize },
}

impl From<EvalErrorKind> for Object {
    #[cold]
    fn from(error: EvalErrorKind) -> Self {
        Object::Error(error.to_string())
    }
}

/// Collapse a result into an object, turning the error into `Object::Error`.
#[inline]
pub fn into_object(result: EvalResult) -> Object {
    result.unwrap_or_else(Object::from)
}
