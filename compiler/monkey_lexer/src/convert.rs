//! Token Conversion
//!
//! Converts raw logos tokens to `monkey_ir::Token`, cooking string escapes.

use monkey_ir::{Token, TokenKind};

use crate::cook_escape::cook_string;
use crate::raw_token::RawToken;

/// Convert a raw token and its source slice to a `Token`.
///
/// Returns `None` for trivia the parser never sees.
pub(crate) fn convert_token(raw: RawToken, slice: &str) -> Option<Token> {
    let kind = match raw {
        RawToken::LineComment => return None,

        // Literals
        RawToken::Ident => TokenKind::Ident,
        RawToken::Int => TokenKind::Int,
        RawToken::String => return Some(convert_string(slice)),

        // Keywords
        RawToken::Function => TokenKind::Function,
        RawToken::Let => TokenKind::Let,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Return => TokenKind::Return,

        // Operators
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Asterisk => TokenKind::Asterisk,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,

        // Delimiters
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
    };
    Some(Token::new(kind, slice))
}

/// A string token's literal is its decoded content; a bad escape turns the
/// whole literal into an `Illegal` token.
fn convert_string(slice: &str) -> Token {
    let content = slice
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(slice);
    match cook_string(content) {
        Ok(cooked) => Token::new(TokenKind::String, cooked),
        Err(_) => Token::new(TokenKind::Illegal, slice),
    }
}
