use pretty_assertions::assert_eq;

use super::Interpreter;
use crate::{Builtins, Environment, Object};

#[test]
fn test_builder_defaults() {
    let interpreter = Interpreter::builder().build();

    assert_eq!(
        interpreter.max_call_depth(),
        Interpreter::DEFAULT_MAX_CALL_DEPTH
    );
    assert_eq!(
        interpreter.builtins().names(),
        vec!["first", "last", "len", "pop", "print", "push", "rest"]
    );
}

#[test]
fn test_builder_custom_registry() {
    let interpreter = Interpreter::builder()
        .builtins(Builtins::empty())
        .max_call_depth(3)
        .build();

    assert!(interpreter.builtins().get("len").is_none());
    assert_eq!(interpreter.max_call_depth(), 3);
}

#[test]
fn test_registry_clones_share_one_table() {
    let registry = Builtins::standard();
    let a = Interpreter::builder().builtins(registry.clone()).build();
    let b = Interpreter::builder().builtins(registry.clone()).build();

    assert!(a.builtins().ptr_eq(b.builtins()));
    assert!(a.builtins().ptr_eq(&registry));
}

#[test]
fn test_registering_on_a_clone_leaves_the_original_alone() {
    fn answer(_: &[Object]) -> crate::EvalResult {
        Ok(Object::Integer(42))
    }

    let original = Builtins::standard();
    let mut extended = original.clone();
    extended.register("answer", answer);

    assert!(!extended.ptr_eq(&original));
    assert!(original.get("answer").is_none());
    assert_eq!(
        extended.get("answer").map(|builtin| builtin.call(&[])),
        Some(Ok(Object::Integer(42)))
    );
    assert_eq!(extended.names().len(), original.names().len() + 1);
}

#[test]
fn test_empty_program_is_null() {
    let program = monkey_ir::Program::new();

    assert_eq!(
        Interpreter::new().eval_program(&program, &Environment::new()),
        Object::NULL
    );
}
