//! Evaluator for Monkey.
//!
//! - `Object`: runtime values, including the `ReturnValue`/`Error` signals
//! - `Environment`: lexical scope chain shared by closures
//! - `Builtins`: the built-in function registry injected into the evaluator
//! - `Interpreter`: the tree walker itself, configured via
//!   `InterpreterBuilder`
//!
//! ```ignore
//! let program = monkey_parse::parse("let a = 5; a * 2").program;
//! let env = Environment::new();
//! let result = Interpreter::new().eval_program(&program, &env);
//! assert_eq!(result, Object::Integer(10));
//! ```

mod builtins;
mod environment;
mod errors;
mod interpreter;
mod object;
mod operators;
mod unary_operators;

#[cfg(test)]
mod tests;

pub use builtins::{Builtin, BuiltinFn, Builtins};
pub use environment::Environment;
pub use errors::{into_object, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use object::{ArrayObject, FunctionObject, Object, ObjectType};
pub use operators::evaluate_infix;
pub use unary_operators::evaluate_prefix;
