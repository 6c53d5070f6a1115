//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::Builtins;

/// Builder for `Interpreter`.
///
/// Defaults: the standard built-ins and
/// `Interpreter::DEFAULT_MAX_CALL_DEPTH`.
#[derive(Debug)]
pub struct InterpreterBuilder {
    builtins: Option<Builtins>,
    max_call_depth: usize,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            builtins: None,
            max_call_depth: Interpreter::DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Use `builtins` instead of the standard registry.
    ///
    /// Pass a clone to share one registry between interpreters.
    #[must_use]
    pub fn builtins(mut self, builtins: Builtins) -> Self {
        self.builtins = Some(builtins);
        self
    }

    /// Deepest allowed nesting of user function calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Finish, falling back to `Builtins::standard()` if no registry was set.
    pub fn build(self) -> Interpreter {
        Interpreter {
            builtins: self.builtins.unwrap_or_else(Builtins::standard),
            call_depth: 0,
            max_call_depth: self.max_call_depth,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
