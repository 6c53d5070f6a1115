//! Evaluator tests.
//!
//! Programs are parsed with `monkey_parse` and evaluated in a fresh root
//! environment.
//! - `eval_tests`: statements, control flow, scoping, closures
//! - `operators_tests`: infix/prefix operator semantics and errors
//! - `builtins_tests`: the standard built-in registry

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod builtins_tests;
mod operators_tests;

use crate::{Environment, Interpreter, Object};

fn eval_with(interpreter: &mut Interpreter, source: &str) -> Object {
    let output = monkey_parse::parse(source);
    assert!(
        !output.has_errors(),
        "unexpected syntax errors for {source:?}: {:?}",
        output.errors
    );
    interpreter.eval_program(&output.program, &Environment::new())
}

fn eval(source: &str) -> Object {
    eval_with(&mut Interpreter::new(), source)
}

/// The error message of an evaluation that must fail.
fn eval_error(source: &str) -> String {
    match eval(source) {
        Object::Error(message) => message,
        other => panic!("expected an error for {source:?}, got {other:?}"),
    }
}
