//! Parse error types.
//!
//! Errors are accumulated by the parser, never thrown; the `Display` text
//! of each variant is the message shown to the user.

use monkey_ir::TokenKind;

/// A syntax error recorded while parsing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A required token was not next in the stream.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// The current token cannot begin an expression.
    #[error("no prefix parse function for {kind} found")]
    NoPrefixRule { kind: TokenKind },

    /// An integer literal does not fit in `i64`.
    #[error("could not parse \"{literal}\" as integer")]
    InvalidInteger { literal: String },
}
