//! Monkey interpreter front end.
//!
//! Wires the scanner, parser, and evaluator into the user-facing entry
//! points: `execute` (one-shot file execution), `start` (the interactive
//! loop), and the `parse`/`lex` debug commands. The `monkey` binary is a
//! thin argument parser over this library.

pub mod commands;
mod tracing_setup;

pub use commands::{
    execute, execute_with, greet, greeting, lex_file, lex_source, parse_file, parse_source,
    run_file, start, start_with_config, CommandError, ExecOutcome, ReplConfig,
};
pub use tracing_setup::init_tracing;
