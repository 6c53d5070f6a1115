//! Monkey CLI
//!
//! `monkey` starts the REPL; `monkey run <file>` executes a program.

use std::io;
use std::process::ExitCode;

use monkey_eval::Interpreter;
use monkeyc::{greet, lex_file, parse_file, run_file, start_with_config, ReplConfig};

fn main() -> ExitCode {
    monkeyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let (flags, positional): (Vec<&str>, Vec<&str>) = args
        .iter()
        .skip(1)
        .map(String::as_str)
        .partition(|arg| arg.starts_with("--"));

    let mut max_call_depth = Interpreter::DEFAULT_MAX_CALL_DEPTH;
    for flag in flags {
        if let Some(value) = flag.strip_prefix("--max-call-depth=") {
            match value.parse() {
                Ok(depth) => max_call_depth = depth,
                Err(_) => {
                    eprintln!("error: invalid call depth '{value}'");
                    return ExitCode::FAILURE;
                }
            }
        } else if flag == "--help" {
            print_usage();
            return ExitCode::SUCCESS;
        } else {
            eprintln!("error: unknown option '{flag}'");
            print_usage();
            return ExitCode::FAILURE;
        }
    }

    match positional.as_slice() {
        [] | ["repl"] => repl(max_call_depth),
        ["run", path] => {
            let mut interpreter = Interpreter::builder()
                .max_call_depth(max_call_depth)
                .build();
            match run_file(path, &mut interpreter, &mut io::stdout().lock()) {
                Ok(outcome) if outcome.is_success() => ExitCode::SUCCESS,
                Ok(_) => ExitCode::FAILURE,
                Err(e) => report(&e),
            }
        }
        ["parse", path] => match parse_file(path, &mut io::stdout().lock()) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(e) => report(&e),
        },
        ["lex", path] => match lex_file(path, &mut io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => report(&e),
        },
        ["help" | "-h"] => {
            print_usage();
            ExitCode::SUCCESS
        }
        ["run" | "parse" | "lex"] => {
            eprintln!("error: missing file path");
            print_usage();
            ExitCode::FAILURE
        }
        _ => {
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn repl(max_call_depth: usize) -> ExitCode {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_string());
    let mut stdout = io::stdout().lock();
    if let Err(e) = greet(&user, &mut stdout) {
        return report(&e);
    }

    let config = ReplConfig {
        max_call_depth,
        ..ReplConfig::default()
    };
    match start_with_config(&config, io::stdin().lock(), stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn report(error: &dyn std::error::Error) -> ExitCode {
    eprintln!("error: {error}");
    ExitCode::FAILURE
}

fn print_usage() {
    println!("Monkey interpreter");
    println!();
    println!("Usage: monkey [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl               Start the interactive prompt (default)");
    println!("  run <file>         Execute a program and print its result");
    println!("  parse <file>       Print the parsed program, one statement per line");
    println!("  lex <file>         Print the token stream");
    println!("  help               Show this message");
    println!();
    println!("Options:");
    println!("  --max-call-depth=<n>   Nested call limit (default: 10000)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=monkey_parse=trace) for tracing output.");
}
