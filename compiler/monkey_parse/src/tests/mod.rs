//! Parser tests.
//!
//! - `parser`: statements, literals, and the shape of each expression form
//! - `precedence`: operator binding rendered back as parenthesized source
//! - `recovery`: error messages and resuming after bad statements

#![allow(clippy::unwrap_used, clippy::expect_used)]


use monkey_ir::Program;

use crate::parse;

/// Parse `source`, failing the test on any syntax error.
fn parse_ok(source: &str) -> Program {
    let output = parse(source);
    assert!(
        !output.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        output.errors
    );
    output.program
}
