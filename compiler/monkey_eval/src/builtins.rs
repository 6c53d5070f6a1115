//! Built-in functions.
//!
//! `Builtins` is an explicit registry handed to the interpreter (see
//! `InterpreterBuilder::builtins`), so tests can run against an empty or
//! custom set instead of process-wide state.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::errors::{EvalErrorKind, EvalResult};
use crate::{ArrayObject, Object};

/// Native function signature.
pub type BuiltinFn = fn(&[Object]) -> EvalResult;

/// A named native function.
#[derive(Copy, Clone)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl Builtin {
    /// Invoke the native function. Arity is checked by the function.
    #[inline]
    pub fn call(&self, args: &[Object]) -> EvalResult {
        (self.func)(args)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

/// Registry of built-in functions by name.
///
/// Clones share one table, so every interpreter built from the same
/// registry (the REPL's, a test's) looks functions up in the same map.
/// `register` on a shared registry copies the table first; other holders
/// keep their functions.
#[derive(Clone, Debug, Default)]
pub struct Builtins {
    functions: Rc<FxHashMap<&'static str, Builtin>>,
}

impl Builtins {
    /// A registry with no functions.
    pub fn empty() -> Self {
        Builtins::default()
    }

    /// `len first last rest push pop print`.
    pub fn standard() -> Self {
        let mut builtins = Builtins::empty();
        builtins
            .register("len", len)
            .register("first", first)
            .register("last", last)
            .register("rest", rest)
            .register("push", push)
            .register("pop", pop)
            .register("print", print);
        builtins
    }

    /// Add or replace a function.
    pub fn register(&mut self, name: &'static str, func: BuiltinFn) -> &mut Self {
        Rc::make_mut(&mut self.functions).insert(name, Builtin { name, func });
        self
    }

    /// Look up a function by the identifier it is called through.
    pub fn get(&self, name: &str) -> Option<Builtin> {
        self.functions.get(name).copied()
    }

    /// Whether both registries share one table.
    #[inline]
    pub fn ptr_eq(&self, other: &Builtins) -> bool {
        Rc::ptr_eq(&self.functions, &other.functions)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

fn expect_arity(args: &[Object], want: usize) -> Result<(), EvalErrorKind> {
    if args.len() == want {
        Ok(())
    } else {
        Err(EvalErrorKind::WrongArgumentCount {
            want,
            got: args.len(),
        })
    }
}

fn expect_array<'a>(builtin: &'static str, arg: &'a Object) -> Result<&'a ArrayObject, EvalErrorKind> {
    match arg {
        Object::Array(array) => Ok(array),
        other => Err(EvalErrorKind::ExpectedArray {
            builtin,
            got: other.type_tag(),
        }),
    }
}

fn length(n: usize) -> Object {
    Object::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

fn len(args: &[Object]) -> EvalResult {
    expect_arity(args, 1)?;
    match &args[0] {
        Object::String(value) => Ok(length(value.len())),
        Object::Array(array) => Ok(length(array.len())),
        other => Err(EvalErrorKind::UnsupportedArgument {
            builtin: "len",
            got: other.type_tag(),
        }),
    }
}

fn first(args: &[Object]) -> EvalResult {
    expect_arity(args, 1)?;
    let array = expect_array("first", &args[0])?;
    Ok(array.get(0).unwrap_or(Object::NULL))
}

fn last(args: &[Object]) -> EvalResult {
    expect_arity(args, 1)?;
    let array = expect_array("last", &args[0])?;
    Ok(array.borrow().last().cloned().unwrap_or(Object::NULL))
}

/// Every element but the first, as a new array.
fn rest(args: &[Object]) -> EvalResult {
    expect_arity(args, 1)?;
    let array = expect_array("rest", &args[0])?;
    let elements = array.borrow();
    match elements.split_first() {
        Some((_, tail)) => Ok(Object::array(tail.to_vec())),
        None => Ok(Object::NULL),
    }
}

/// Appends in place and returns the new length.
fn push(args: &[Object]) -> EvalResult {
    expect_arity(args, 2)?;
    let array = expect_array("push", &args[0])?;
    Ok(length(array.push(args[1].clone())))
}

fn pop(args: &[Object]) -> EvalResult {
    expect_arity(args, 1)?;
    let array = expect_array("pop", &args[0])?;
    array.pop().ok_or(EvalErrorKind::PopFromEmpty)
}

/// Concatenated inspect renderings of every argument.
fn print(args: &[Object]) -> EvalResult {
    let text: String = args.iter().map(Object::inspect).collect();
    Ok(Object::string(text))
}
