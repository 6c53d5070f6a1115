//! Lexer for Monkey using logos.
//!
//! `Lexer` pulls tokens on demand and implements the parser-facing
//! `TokenSource` contract: forward-only, `Eof` forever once the input is
//! exhausted. Anything logos cannot match (an unknown character, an
//! unterminated string) comes out as an `Illegal` token carrying the
//! offending text; the parser reports it.

mod convert;
mod cook_escape;
mod raw_token;


use logos::Logos;
use monkey_ir::{Token, TokenKind, TokenSource};

use crate::convert::convert_token;
use crate::raw_token::RawToken;

/// Pull-based scanner over a source string.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
    done: bool,
}

impl<'src> Lexer<'src> {
    /// Scan `source` lazily; nothing is read until the first `next_token`.
    pub fn new(source: &'src str) -> Self {
        Lexer {
            inner: RawToken::lexer(source),
            done: false,
        }
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        if self.done {
            return Token::eof();
        }
        loop {
            match self.inner.next() {
                Some(Ok(raw)) => {
                    if let Some(token) = convert_token(raw, self.inner.slice()) {
                        return token;
                    }
                }
                Some(Err(())) => return Token::new(TokenKind::Illegal, self.inner.slice()),
                None => {
                    self.done = true;
                    return Token::eof();
                }
            }
        }
    }
}

/// Lex an entire source string.
///
/// The result always ends with exactly one `Eof` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let at_end = token.is(TokenKind::Eof);
        tokens.push(token);
        if at_end {
            return tokens;
        }
    }
}
