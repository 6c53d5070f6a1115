//! Two-token window over a `TokenSource`.

use monkey_ir::{Token, TokenKind, TokenSource};
use tracing::trace;

/// Current token plus one token of lookahead.
///
/// The only way to move is `advance`, which shifts `peek` into `current`
/// and pulls a fresh token from the source.
pub struct Cursor<'src> {
    source: Box<dyn TokenSource + 'src>,
    current: Token,
    peek: Token,
}

impl<'src> Cursor<'src> {
    /// Create a cursor with `current` and `peek` primed.
    pub fn new(source: impl TokenSource + 'src) -> Self {
        let mut source: Box<dyn TokenSource + 'src> = Box::new(source);
        let current = source.next_token();
        let peek = source.next_token();
        Cursor {
            source,
            current,
            peek,
        }
    }

    /// Shift `peek` into `current` and pull the next token from the source.
    pub fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        trace!(
            kind = %self.current.kind,
            literal = %self.current.literal,
            "advance"
        );
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Check the current token's kind.
    #[inline]
    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    /// Check the next token's kind without consuming anything.
    #[inline]
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }
}
