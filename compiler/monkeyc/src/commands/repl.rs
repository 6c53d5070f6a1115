//! The interactive read-eval-print loop.

use std::io::{BufRead, Write};

use monkey_eval::{Environment, Interpreter};

use super::write_parse_errors;

/// REPL settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    pub max_call_depth: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: ">> ".to_string(),
            max_call_depth: Interpreter::DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

/// The banner shown before the first prompt.
pub fn greeting(user: &str) -> String {
    format!("Hello {user}! This is the Monkey Parser\nFeel free to type in the commands\n")
}

/// Write the banner and flush it, so it shows before input is read.
pub fn greet(user: &str, output: &mut impl Write) -> std::io::Result<()> {
    output.write_all(greeting(user).as_bytes())?;
    output.flush()
}

/// Run the REPL with the default configuration.
pub fn start(input: impl BufRead, output: impl Write) -> std::io::Result<()> {
    start_with_config(&ReplConfig::default(), input, output)
}

/// Read a line, evaluate it, print the result; until end of input.
///
/// One environment persists across lines, so earlier bindings stay
/// visible. A line with syntax errors prints them (indented) and is not
/// evaluated.
pub fn start_with_config(
    config: &ReplConfig,
    mut input: impl BufRead,
    mut output: impl Write,
) -> std::io::Result<()> {
    let mut interpreter = Interpreter::builder()
        .max_call_depth(config.max_call_depth)
        .build();
    let env = Environment::new();
    let mut line = String::new();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let parsed = monkey_parse::parse(&line);
        if parsed.has_errors() {
            write_parse_errors(&mut output, "   ", &parsed.errors)?;
            continue;
        }

        let result = interpreter.eval_program(&parsed.program, &env);
        writeln!(output, "{}", result.inspect())?;
    }
}
