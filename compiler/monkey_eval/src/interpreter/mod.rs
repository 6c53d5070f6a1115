//! Tree-walking interpreter.
//!
//! Evaluation is total: every AST node yields an `Object`. Runtime errors
//! are `Object::Error` values and `return` is an `Object::ReturnValue`;
//! both short-circuit every enclosing block, and only a function call (for
//! `ReturnValue`) or the program root stops them.

mod builder;
mod function_call;

#[cfg(test)]
mod tests;

use std::rc::Rc;

use monkey_ir::{BlockStatement, Expression, IfExpression, Program, Statement};
use monkey_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::errors::{into_object, EvalErrorKind, EvalResult};
use crate::operators::evaluate_infix;
use crate::unary_operators::evaluate_prefix;
use crate::{Builtins, Environment, FunctionObject, Object};

pub use builder::InterpreterBuilder;

/// Evaluate to a value, handing it straight back to the caller if it is an
/// error or a `return` signal.
///
/// An `if` in expression position yields its block's `ReturnValue`; that
/// signal must keep unwinding to the enclosing call, never become an
/// operand, a binding, or an element.
macro_rules! propagate {
    ($value:expr) => {{
        let value = $value;
        if value.is_unwinding() {
            return value;
        }
        value
    }};
}

/// The evaluator.
///
/// Holds the built-in registry and the call-depth guard. Variable state
/// lives in the `Environment` passed to each call, so one interpreter can
/// serve many environments (the REPL keeps one environment across lines).
pub struct Interpreter {
    builtins: Builtins,
    call_depth: usize,
    max_call_depth: usize,
}

impl Interpreter {
    /// Call nesting allowed when the builder is not told otherwise.
    pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

    /// An interpreter with the standard built-ins.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Start configuring an interpreter.
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The registry identifiers fall back to when unbound.
    pub fn builtins(&self) -> &Builtins {
        &self.builtins
    }

    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    /// Evaluate a whole program.
    ///
    /// A top-level `return` ends the program with its value; an error ends
    /// it with the error. Otherwise the result is the last statement's
    /// value (`null` for an empty program).
    pub fn eval_program(&mut self, program: &Program, env: &Environment) -> Object {
        debug!(statements = program.statements.len(), "eval program");
        let mut result = Object::NULL;
        for stmt in &program.statements {
            match self.eval_statement(stmt, env) {
                Object::ReturnValue(value) => return *value,
                error @ Object::Error(_) => return error,
                value => result = value,
            }
        }
        result
    }

    /// Evaluate statements in order, stopping at the first `ReturnValue` or
    /// `Error` and handing it back unchanged.
    ///
    /// Blocks share the environment they run in.
    pub fn eval_block(&mut self, block: &BlockStatement, env: &Environment) -> Object {
        let mut result = Object::NULL;
        for stmt in &block.statements {
            result = self.eval_statement(stmt, env);
            if result.is_unwinding() {
                return result;
            }
        }
        result
    }

    /// Evaluate one statement.
    ///
    /// `let` binds in `env` and yields `null`; `return` wraps its value in
    /// `ReturnValue`; a bare block runs in `env` itself.
    pub fn eval_statement(&mut self, stmt: &Statement, env: &Environment) -> Object {
        match stmt {
            Statement::Let(stmt) => {
                let value = propagate!(self.eval_expression(&stmt.value, env));
                env.set(stmt.name.as_str(), value);
                Object::NULL
            }
            Statement::Return(stmt) => {
                let value = propagate!(self.eval_expression(&stmt.value, env));
                Object::ReturnValue(Box::new(value))
            }
            Statement::Expression(stmt) => self.eval_expression(&stmt.expression, env),
            Statement::Block(block) => self.eval_block(block, env),
        }
    }

    /// Evaluate an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deep nesting (in the tree or in
    /// recursive calls) grows the stack instead of overflowing it.
    pub fn eval_expression(&mut self, expr: &Expression, env: &Environment) -> Object {
        ensure_sufficient_stack(|| self.eval_expression_inner(expr, env))
    }

    fn eval_expression_inner(&mut self, expr: &Expression, env: &Environment) -> Object {
        match expr {
            Expression::Identifier(ident) => into_object(self.eval_identifier(ident.as_str(), env)),
            Expression::IntegerLiteral(value) => Object::Integer(*value),
            Expression::StringLiteral(value) => Object::string(value.as_str()),
            Expression::Boolean(value) => Object::from_bool(*value),
            Expression::Prefix { operator, right } => {
                let right = propagate!(self.eval_expression(right, env));
                into_object(evaluate_prefix(*operator, &right))
            }
            Expression::Infix {
                operator,
                left,
                right,
            } => {
                let left = propagate!(self.eval_expression(left, env));
                let right = propagate!(self.eval_expression(right, env));
                into_object(evaluate_infix(*operator, &left, &right))
            }
            Expression::If(expr) => self.eval_if(expr, env),
            Expression::Function(literal) => Object::Function(Rc::new(FunctionObject::new(
                Rc::clone(literal),
                env.clone(),
            ))),
            Expression::Call { callee, arguments } => {
                let callee = propagate!(self.eval_expression(callee, env));
                match self.eval_expressions(arguments, env) {
                    Ok(args) => self.apply_function(&callee, &args),
                    Err(error) => error,
                }
            }
            Expression::ArrayLiteral(elements) => match self.eval_expressions(elements, env) {
                Ok(elements) => Object::array(elements),
                Err(error) => error,
            },
            Expression::Index { left, index } => {
                let left = propagate!(self.eval_expression(left, env));
                let index = propagate!(self.eval_expression(index, env));
                into_object(eval_index(&left, &index))
            }
        }
    }

    /// Environment first, so `let` can shadow a built-in.
    fn eval_identifier(&self, name: &str, env: &Environment) -> EvalResult {
        if let Some(value) = env.get(name) {
            return Ok(value);
        }
        if let Some(builtin) = self.builtins.get(name) {
            return Ok(Object::Builtin(builtin));
        }
        Err(EvalErrorKind::IdentifierNotFound {
            name: name.to_string(),
        })
    }

    fn eval_if(&mut self, expr: &IfExpression, env: &Environment) -> Object {
        let condition = propagate!(self.eval_expression(&expr.condition, env));
        if condition.is_truthy() {
            self.eval_block(&expr.consequence, env)
        } else if let Some(alternative) = &expr.alternative {
            self.eval_block(alternative, env)
        } else {
            Object::NULL
        }
    }

    /// Evaluate left to right; the first error or `return` signal comes
    /// back as `Err`.
    fn eval_expressions(
        &mut self,
        exprs: &[Expression],
        env: &Environment,
    ) -> Result<Vec<Object>, Object> {
        let mut values = Vec::with_capacity(exprs.len());
        for expr in exprs {
            let value = self.eval_expression(expr, env);
            if value.is_unwinding() {
                return Err(value);
            }
            values.push(value);
        }
        Ok(values)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

/// `array[index]`; out of range (negative included) is `null`.
fn eval_index(left: &Object, index: &Object) -> EvalResult {
    match (left, index) {
        (Object::Array(array), Object::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| array.get(i))
            .unwrap_or(Object::NULL)),
        _ => Err(EvalErrorKind::IndexNotSupported {
            left: left.type_tag(),
            index: index.type_tag(),
        }),
    }
}
