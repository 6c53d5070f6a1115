//! End-to-end tests for the command handlers, driven through in-memory
//! buffers.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "tests panic on failure")]

use std::io::{self, Write};

use monkey_eval::Interpreter;
use monkeyc::{
    execute, execute_with, greet, greeting, lex_source, parse_source, start, ExecOutcome,
};
use pretty_assertions::assert_eq;

fn run(source: &str) -> (ExecOutcome, String) {
    let mut out = Vec::new();
    let outcome = execute(source, &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

fn repl(input: &str) -> String {
    let mut out = Vec::new();
    start(input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_execute_prints_result() {
    let source = "
        let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
        fib(15);
    ";
    assert_eq!(run(source), (ExecOutcome::Value, "610\n".to_string()));
}

#[test]
fn test_execute_map_reduce_program() {
    let source = "
        let map = fn(arr, f) {
            let out = [];
            let iter = fn(arr) {
                if (len(arr) == 0) { out } else { push(out, f(first(arr))); iter(rest(arr)) }
            };
            iter(arr)
        };
        let reduce = fn(arr, init, f) {
            let iter = fn(arr, result) {
                if (len(arr) == 0) { result } else { iter(rest(arr), f(result, first(arr))) }
            };
            iter(arr, init)
        };
        let doubled = map([1, 2, 3, 4], fn(x) { x * 2 });
        [doubled, reduce(doubled, 0, fn(a, b) { a + b })];
    ";
    assert_eq!(
        run(source),
        (ExecOutcome::Value, "[[2, 4, 6, 8], 20]\n".to_string())
    );
}

#[test]
fn test_execute_reports_syntax_errors_without_evaluating() {
    let (outcome, output) = run("let x 5; print(\"side effect\");");
    assert_eq!(outcome, ExecOutcome::SyntaxErrors);
    assert_eq!(
        output,
        "parser error: expected next token to be =, got INT instead\n"
    );
}

#[test]
fn test_execute_reports_runtime_error() {
    let (outcome, output) = run("let a = 5; a + true;");
    assert_eq!(outcome, ExecOutcome::RuntimeError);
    assert_eq!(output, "ERROR: type mismatch: INTEGER + BOOLEAN\n");
    assert!(!outcome.is_success());
}

#[test]
fn test_execute_respects_call_depth_limit() {
    let mut interpreter = Interpreter::builder().max_call_depth(50).build();
    let mut out = Vec::new();
    let outcome = execute_with(
        &mut interpreter,
        "let f = fn(n) { f(n + 1) }; f(0);",
        &mut out,
    )
    .unwrap();
    assert_eq!(outcome, ExecOutcome::RuntimeError);
    assert!(String::from_utf8(out).unwrap().starts_with("ERROR: "));
}

#[test]
fn test_execute_prints_self_containing_array() {
    assert_eq!(
        run("let a = [1]; push(a, a); a"),
        (ExecOutcome::Value, "[1, [...]]\n".to_string())
    );
}

#[test]
fn test_repl_keeps_bindings_between_lines() {
    let output = repl("let a = 5;\nlet b = a * 2;\nb + 1\n");
    assert_eq!(output, ">> null\n>> null\n>> 11\n>> ");
}

#[test]
fn test_repl_prints_parse_errors_indented() {
    let output = repl("let = 1;\n1 + 1\n");
    assert_eq!(
        output,
        ">>    expected next token to be IDENT, got = instead\n>> 2\n>> "
    );
}

#[test]
fn test_repl_prints_closures_and_errors() {
    let output = repl("let add = fn(x) { fn(y) { x + y } };\nadd(2)(3)\nfoo\n");
    assert_eq!(
        output,
        ">> null\n>> 5\n>> ERROR: identifier not found: foo\n>> "
    );
}

#[test]
fn test_repl_empty_input_shows_one_prompt() {
    assert_eq!(repl(""), ">> ");
}

#[test]
fn test_greeting() {
    assert_eq!(
        greeting("ada"),
        "Hello ada! This is the Monkey Parser\nFeel free to type in the commands\n"
    );
}

/// Accepts writes but fails every flush.
struct FailingFlush(Vec<u8>);

impl Write for FailingFlush {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

#[test]
fn test_greet_flushes_banner() {
    let mut out = Vec::new();
    greet("ada", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), greeting("ada"));
}

#[test]
fn test_greet_reports_flush_failure() {
    let mut out = FailingFlush(Vec::new());
    let error = greet("ada", &mut out).unwrap_err();

    assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(String::from_utf8(out.0).unwrap(), greeting("ada"));
}

#[test]
fn test_parse_command_renders_statements() {
    let mut out = Vec::new();
    let ok = parse_source("let x = 1 + 2 * 3; x", &mut out).unwrap();
    assert!(ok);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "let x = (1 + (2 * 3));\nx\n"
    );
}

#[test]
fn test_lex_command_lists_tokens() {
    let mut out = Vec::new();
    lex_source("let x = 5;", &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].ends_with("\"let\""));
    assert!(lines[3].ends_with("\"5\""));
    assert!(lines[5].starts_with("Eof"));
}
