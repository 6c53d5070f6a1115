//! Command handlers for the Monkey CLI.
//!
//! Each submodule implements one command. Every handler writes to a caller
//! supplied `Write` so tests can drive it with in-memory buffers; shared
//! utilities like `read_file` live here in the module root.

use std::io;

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use repl::{greet, greeting, start, start_with_config, ReplConfig};
pub use run::{execute, execute_with, run_file, ExecOutcome};

/// Failure of a CLI command itself (as opposed to errors in the Monkey
/// program being run, which are reported as output).
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Read a source file.
pub(crate) fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::ReadFile {
        path: path.to_string(),
        source,
    })
}

/// Write each syntax error on its own line behind `prefix`.
pub(crate) fn write_parse_errors(
    out: &mut impl io::Write,
    prefix: &str,
    errors: &[monkey_parse::ParseError],
) -> io::Result<()> {
    for error in errors {
        writeln!(out, "{prefix}{error}")?;
    }
    Ok(())
}
