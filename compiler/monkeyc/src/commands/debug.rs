//! Debug commands: `parse` and `lex` for inspecting front-end output.

use std::io::Write;

use monkey_ir::{TokenKind, TokenSource};
use monkey_lexer::Lexer;

use super::{read_file, write_parse_errors, CommandError};

/// Print one rendered statement per line, or the syntax errors.
///
/// Returns whether the source parsed cleanly.
pub fn parse_source(source: &str, out: &mut impl Write) -> Result<bool, CommandError> {
    let output = monkey_parse::parse(source);
    if output.has_errors() {
        write_parse_errors(out, "parser error: ", &output.errors)?;
        return Ok(false);
    }
    for stmt in &output.program.statements {
        writeln!(out, "{stmt}")?;
    }
    Ok(true)
}

/// `monkey parse <file>`
pub fn parse_file(path: &str, out: &mut impl Write) -> Result<bool, CommandError> {
    parse_source(&read_file(path)?, out)
}

/// Print one token per line as `<kind> <literal>`, through `Eof`.
pub fn lex_source(source: &str, out: &mut impl Write) -> Result<(), CommandError> {
    let mut lexer = Lexer::new(source);
    loop {
        let token = lexer.next_token();
        writeln!(out, "{:?} {:?}", token.kind, token.literal)?;
        if token.is(TokenKind::Eof) {
            return Ok(());
        }
    }
}

/// `monkey lex <file>`
pub fn lex_file(path: &str, out: &mut impl Write) -> Result<(), CommandError> {
    lex_source(&read_file(path)?, out)
}
