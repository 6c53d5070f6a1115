//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! conversion to `monkey_ir::Token` (keyword/ident literals attached,
//! string escapes cooked).

use logos::{Lexer, Logos};

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    // Keywords
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,

    // Literals
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"[0-9]+")]
    Int,
    /// A double-quoted string; the callback consumes through the closing
    /// quote and fails on end of input.
    #[token("\"", scan_string)]
    String,

    // Operators
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("!")]
    Bang,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // Delimiters
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
}

/// Consume a string body after the opening quote.
///
/// A backslash always escapes the next character here; whether the escape
/// is valid is decided later by `cook_string`. Returns `false` (a lexing
/// error spanning the consumed text) when the closing quote is missing.
fn scan_string(lex: &mut Lexer<'_, RawToken>) -> bool {
    let mut escaped = false;
    let mut consumed = 0;

    for (i, c) in lex.remainder().char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            lex.bump(i + 1);
            return true;
        }
        consumed = i + c.len_utf8();
    }

    lex.bump(consumed);
    false
}
