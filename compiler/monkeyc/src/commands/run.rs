//! The `run` command: parse and evaluate a whole program once.

use std::io::Write;

use monkey_eval::{Environment, Interpreter, Object};
use tracing::debug;

use super::{read_file, write_parse_errors, CommandError};

/// How a one-shot execution ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExecOutcome {
    /// The program had syntax errors and was not evaluated.
    SyntaxErrors,
    /// Evaluation produced a value.
    Value,
    /// Evaluation ended in a runtime error.
    RuntimeError,
}

impl ExecOutcome {
    /// Whether the program produced a value; drives the exit code.
    pub fn is_success(self) -> bool {
        self == ExecOutcome::Value
    }
}

/// Execute `source` in a fresh environment with a default interpreter.
pub fn execute(source: &str, out: &mut impl Write) -> Result<ExecOutcome, CommandError> {
    execute_with(&mut Interpreter::new(), source, out)
}

/// Execute `source` in a fresh environment.
///
/// Prints every syntax error as `parser error: <message>` and skips
/// evaluation; otherwise prints the inspect rendering of the result.
pub fn execute_with(
    interpreter: &mut Interpreter,
    source: &str,
    out: &mut impl Write,
) -> Result<ExecOutcome, CommandError> {
    let output = monkey_parse::parse(source);
    if output.has_errors() {
        debug!(errors = output.errors.len(), "not evaluating");
        write_parse_errors(out, "parser error: ", &output.errors)?;
        return Ok(ExecOutcome::SyntaxErrors);
    }

    let result = interpreter.eval_program(&output.program, &Environment::new());
    writeln!(out, "{}", result.inspect())?;

    Ok(match result {
        Object::Error(_) => ExecOutcome::RuntimeError,
        _ => ExecOutcome::Value,
    })
}

/// Read and execute a source file.
pub fn run_file(
    path: &str,
    interpreter: &mut Interpreter,
    out: &mut impl Write,
) -> Result<ExecOutcome, CommandError> {
    let source = read_file(path)?;
    execute_with(interpreter, &source, out)
}
