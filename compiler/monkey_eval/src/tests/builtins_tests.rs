//! Tests for the standard built-in functions.

use pretty_assertions::assert_eq;

use super::{eval, eval_error};
use crate::{Builtins, Object};

#[test]
fn test_len() {
    assert_eq!(eval(r#"len("")"#), Object::Integer(0));
    assert_eq!(eval(r#"len("four")"#), Object::Integer(4));
    assert_eq!(eval(r#"len("hello world")"#), Object::Integer(11));
    assert_eq!(eval("len([1, 2, 3])"), Object::Integer(3));
    assert_eq!(
        eval_error("len(1)"),
        "argument to `len` not supported, got INTEGER"
    );
    assert_eq!(
        eval_error(r#"len("one", "two")"#),
        "wrong number of arguments: want=1, got=2"
    );
}

#[test]
fn test_first_last_rest() {
    assert_eq!(eval("first([1, 2, 3])"), Object::Integer(1));
    assert_eq!(eval("first([])"), Object::NULL);
    assert_eq!(eval("last([1, 2, 3])"), Object::Integer(3));
    assert_eq!(eval("last([])"), Object::NULL);
    assert_eq!(
        eval("rest([1, 2, 3])"),
        Object::array(vec![Object::Integer(2), Object::Integer(3)])
    );
    assert_eq!(eval("rest([1])"), Object::array(vec![]));
    assert_eq!(eval("rest([])"), Object::NULL);
    assert_eq!(
        eval_error("first(1)"),
        "argument to `first` must be ARRAY, got INTEGER"
    );
    assert_eq!(
        eval_error(r#"rest("abc")"#),
        "argument to `rest` must be ARRAY, got STRING"
    );
}

#[test]
fn test_rest_returns_a_new_array() {
    assert_eq!(
        eval("let a = [1, 2, 3]; let b = rest(a); push(b, 4); a"),
        Object::array(vec![
            Object::Integer(1),
            Object::Integer(2),
            Object::Integer(3)
        ])
    );
}

#[test]
fn test_push_mutates_in_place() {
    assert_eq!(eval("let a = [1]; push(a, 2)"), Object::Integer(2));
    assert_eq!(
        eval("let a = [1]; let b = a; push(b, 2); a"),
        Object::array(vec![Object::Integer(1), Object::Integer(2)])
    );
    assert_eq!(
        eval_error("push(1, 1)"),
        "argument to `push` must be ARRAY, got INTEGER"
    );
    assert_eq!(
        eval_error("push([])"),
        "wrong number of arguments: want=2, got=1"
    );
}

#[test]
fn test_push_array_into_itself() {
    assert_eq!(
        eval("let a = [1]; push(a, a); a").inspect(),
        "[1, [...]]"
    );
    assert_eq!(
        eval("let a = [1]; push(a, a); len(a[1][1][1])"),
        Object::Integer(2)
    );
}

#[test]
fn test_pop() {
    assert_eq!(eval("let a = [1, 2]; pop(a)"), Object::Integer(2));
    assert_eq!(
        eval("let a = [1, 2]; pop(a); a"),
        Object::array(vec![Object::Integer(1)])
    );
    assert_eq!(eval_error("pop([])"), "cannot pop from an empty array");
}

#[test]
fn test_print_concatenates_inspect() {
    assert_eq!(eval("print()"), Object::string(""));
    assert_eq!(
        eval(r#"print("x = ", 1, [true, "s"], if (false) { 1 })"#),
        Object::string("x = 1[true, s]null")
    );
}

#[test]
fn test_registry() {
    fn always_null(_: &[Object]) -> crate::EvalResult {
        Ok(Object::NULL)
    }

    let mut builtins = Builtins::standard();
    assert_eq!(
        builtins.names(),
        vec!["first", "last", "len", "pop", "print", "push", "rest"]
    );

    builtins.register("len", always_null);
    let len = builtins.get("len").unwrap();

    assert_eq!(len.name, "len");
    assert_eq!(len.call(&[]), Ok(Object::NULL));
    assert!(Builtins::empty().get("len").is_none());
}
