//! Function call evaluation methods for the Interpreter.

use super::Interpreter;
use crate::errors::{into_object, EvalErrorKind};
use crate::{Environment, FunctionObject, Object};

impl Interpreter {
    /// Call `callee` with already-evaluated arguments.
    #[tracing::instrument(level = "debug", skip_all, fields(depth = self.call_depth))]
    pub(super) fn apply_function(&mut self, callee: &Object, args: &[Object]) -> Object {
        match callee {
            Object::Function(function) => self.call_function(function, args),
            Object::Builtin(builtin) => into_object(builtin.call(args)),
            other => EvalErrorKind::NotAFunction {
                got: other.type_tag(),
            }
            .into(),
        }
    }

    /// Run the body in a fresh child of the captured environment, with
    /// parameters bound positionally.
    fn call_function(&mut self, function: &FunctionObject, args: &[Object]) -> Object {
        let params = function.parameters();
        if params.len() != args.len() {
            return EvalErrorKind::WrongArgumentCount {
                want: params.len(),
                got: args.len(),
            }
            .into();
        }
        if self.call_depth >= self.max_call_depth {
            return EvalErrorKind::CallDepthExceeded {
                limit: self.max_call_depth,
            }
            .into();
        }

        let env = Environment::enclosed(function.env());
        for (param, arg) in params.iter().zip(args) {
            env.set(param.as_str(), arg.clone());
        }

        self.call_depth += 1;
        let result = self.eval_block(function.body(), &env);
        self.call_depth -= 1;

        match result {
            Object::ReturnValue(value) => *value,
            other => other,
        }
    }
}
