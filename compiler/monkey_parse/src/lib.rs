//! Parser for Monkey.
//!
//! A Pratt (precedence-climbing) parser over a pull-based `TokenSource`.
//! Expression syntax is driven by a `RuleRegistry` of per-token prefix and
//! infix rules plus the `Precedence` table; statements dispatch on their
//! leading keyword.
//!
//! Parsing never fails outright: syntax errors are accumulated and the
//! parser resumes at the next statement boundary, so callers always get a
//! best-effort `Program` alongside the error list.

mod cursor;
mod error;
mod grammar;
mod precedence;
mod rules;

#[cfg(test)]
mod tests;

use monkey_ir::{Program, TokenKind, TokenSource};
use monkey_lexer::Lexer;
use tracing::debug;

use crate::cursor::Cursor;
use crate::rules::RuleRegistry;

pub use error::ParseError;
pub use precedence::Precedence;

/// Result of parsing a whole program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub program: Program,
    /// Syntax errors in the order they were found.
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex and parse `source`.
pub fn parse(source: &str) -> ParseOutput {
    Parser::new(Lexer::new(source)).parse_program()
}

/// Parser state.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
    rules: RuleRegistry,
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// A parser over `source` with the standard rule registry.
    ///
    /// Reads two tokens up front to fill `current` and `peek`.
    pub fn new(source: impl TokenSource + 'src) -> Self {
        Parser {
            cursor: Cursor::new(source),
            rules: RuleRegistry::standard(),
            errors: Vec::new(),
        }
    }

    /// Parse statements until end of input.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut program = Program::new();

        while !self.cursor.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
                self.cursor.advance();
            } else {
                self.recover();
                // A stray `}` at top level was already reported.
                if self.cursor.current_is(TokenKind::RBrace) {
                    self.cursor.advance();
                }
            }
        }

        debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        ParseOutput {
            program,
            errors: self.errors,
        }
    }

    /// Advance if the next token is `kind`, otherwise record an error.
    fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.cursor.peek_is(kind) {
            self.cursor.advance();
            Some(())
        } else {
            self.error(ParseError::UnexpectedToken {
                expected: kind,
                found: self.cursor.peek_kind(),
            });
            None
        }
    }

    fn error(&mut self, error: ParseError) {
        debug!(%error, "syntax error");
        self.errors.push(error);
    }

    /// Skip the rest of a failed statement.
    ///
    /// Stops just past a `;`, or on a `}` or `Eof` so an enclosing block
    /// still sees its terminator.
    fn recover(&mut self) {
        loop {
            match self.cursor.current_kind() {
                TokenKind::Semicolon => {
                    self.cursor.advance();
                    return;
                }
                TokenKind::RBrace | TokenKind::Eof => return,
                _ => self.cursor.advance(),
            }
        }
    }
}
