//! Per-token parse rule registry.
//!
//! The Pratt loop never matches on token kinds itself: it asks the
//! registry for the prefix rule of the current token and the infix rule of
//! the next one. Adding syntax means registering a rule.

use monkey_ir::{Expression, TokenKind};
use rustc_hash::FxHashMap;

use crate::grammar::expr;
use crate::Parser;

/// Parses an expression starting at the current token.
pub(crate) type PrefixRule = fn(&mut Parser<'_>) -> Option<Expression>;

/// Continues `left` with the current (operator) token.
pub(crate) type InfixRule = fn(&mut Parser<'_>, Expression) -> Option<Expression>;

/// Prefix and infix rules keyed by the token that triggers them.
pub(crate) struct RuleRegistry {
    prefix: FxHashMap<TokenKind, PrefixRule>,
    infix: FxHashMap<TokenKind, InfixRule>,
}

impl RuleRegistry {
    /// The full Monkey grammar.
    pub(crate) fn standard() -> Self {
        let mut rules = RuleRegistry {
            prefix: FxHashMap::default(),
            infix: FxHashMap::default(),
        };

        rules.register_prefix(TokenKind::Ident, expr::identifier);
        rules.register_prefix(TokenKind::Int, expr::integer_literal);
        rules.register_prefix(TokenKind::String, expr::string_literal);
        rules.register_prefix(TokenKind::True, expr::boolean);
        rules.register_prefix(TokenKind::False, expr::boolean);
        rules.register_prefix(TokenKind::Bang, expr::prefix_operator);
        rules.register_prefix(TokenKind::Minus, expr::prefix_operator);
        rules.register_prefix(TokenKind::LParen, expr::grouped);
        rules.register_prefix(TokenKind::If, expr::if_expression);
        rules.register_prefix(TokenKind::Function, expr::function_literal);
        rules.register_prefix(TokenKind::LBracket, expr::array_literal);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::LtEq,
            TokenKind::GtEq,
        ] {
            rules.register_infix(kind, expr::infix_operator);
        }
        rules.register_infix(TokenKind::LParen, expr::call);
        rules.register_infix(TokenKind::LBracket, expr::index);

        rules
    }

    fn register_prefix(&mut self, kind: TokenKind, rule: PrefixRule) {
        self.prefix.insert(kind, rule);
    }

    fn register_infix(&mut self, kind: TokenKind, rule: InfixRule) {
        self.infix.insert(kind, rule);
    }

    /// The rule for a token at the start of an expression.
    #[inline]
    pub(crate) fn prefix(&self, kind: TokenKind) -> Option<PrefixRule> {
        self.prefix.get(&kind).copied()
    }

    #[inline]
    pub(crate) fn infix(&self, kind: TokenKind) -> Option<InfixRule> {
        self.infix.get(&kind).copied()
    }
}
