//! Tokens produced by the scanner and the pull-based source contract.

use std::fmt;

#[cfg(test)]
mod tests;

/// Token kinds.
///
/// The set is closed and `Copy + Hash` so the parser can key its rule
/// registries on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Returned forever once the source is exhausted.
    Eof,
    /// A character or literal the scanner could not classify.
    Illegal,

    // Identifiers + literals
    Ident,
    Int,
    String,

    // Operators
    Assign,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Bang,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Eq,
    NotEq,

    // Delimiters
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Human-readable name used in syntax errors.
    ///
    /// Fixed tokens use their source text; variable tokens use an
    /// upper-case class name.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Bang => "!",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Function => "fn",
            TokenKind::Let => "let",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
        }
    }

    /// Resolve a scanned word to its keyword kind, if it is one.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "fn" => Some(TokenKind::Function),
            "let" => Some(TokenKind::Let),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "return" => Some(TokenKind::Return),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A scanned token.
///
/// `literal` is the source text, except for string tokens where it holds
/// the decoded content (escapes already resolved).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token.
    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }

    /// Create a token whose literal is the kind's own source text.
    ///
    /// Handy for operators, delimiters and keywords in hand-built streams.
    pub fn fixed(kind: TokenKind) -> Self {
        Token::new(kind, kind.display_name())
    }

    /// Whether this token is of `kind`.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// The scanner contract consumed by the parser.
///
/// Forward-only: there is no rewind. Once input is exhausted every call
/// must return an `Eof` token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// Adapts any token iterator to `TokenSource`, padding with `Eof`.
///
/// Lets tests feed hand-built token sequences straight to the parser.
pub struct TokenStream<I> {
    tokens: I,
}

impl<I: Iterator<Item = Token>> TokenStream<I> {
    /// Feed a fixed token list; `Eof` follows once it runs out.
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
        }
    }
}

impl<I: Iterator<Item = Token>> TokenSource for TokenStream<I> {
    fn next_token(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(Token::eof)
    }
}
