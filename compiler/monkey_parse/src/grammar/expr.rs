//! Expression parsing.
//!
//! `Parser::parse_expression` is the Pratt loop. The rules it dispatches to
//! are free functions so they coerce to the registry's `fn` pointer types.
//! A prefix rule starts on its first token; an infix rule starts on the
//! operator token. Both leave the cursor on the last token they consumed.

use std::rc::Rc;

use monkey_ir::{
    Expression, FunctionLiteral, Identifier, IfExpression, InfixOp, PrefixOp, TokenKind,
};
use monkey_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser, Precedence};

impl Parser<'_> {
    /// Parse an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input grows the
    /// stack instead of overflowing it.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Option<Expression> {
        let kind = self.cursor.current_kind();
        let Some(prefix) = self.rules.prefix(kind) else {
            self.error(ParseError::NoPrefixRule { kind });
            return None;
        };
        let mut left = prefix(self)?;

        while !self.cursor.peek_is(TokenKind::Semicolon)
            && precedence < Precedence::of(self.cursor.peek_kind())
        {
            let Some(infix) = self.rules.infix(self.cursor.peek_kind()) else {
                return Some(left);
            };
            self.cursor.advance();
            left = infix(self, left)?;
        }

        Some(left)
    }

    /// Comma-separated expressions up to `end`, starting on the opening
    /// delimiter and ending on `end`.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut list = Vec::new();
        if self.cursor.peek_is(end) {
            self.cursor.advance();
            return Some(list);
        }

        self.cursor.advance();
        list.push(self.parse_expression(Precedence::Lowest)?);
        while self.cursor.peek_is(TokenKind::Comma) {
            self.cursor.advance();
            self.cursor.advance();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Some(list)
    }

    /// `(a, b, c)` after `fn`, starting on `(` and ending on `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.cursor.peek_is(TokenKind::RParen) {
            self.cursor.advance();
            return Some(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::new(self.cursor.current().literal.as_str()));
        while self.cursor.peek_is(TokenKind::Comma) {
            self.cursor.advance();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::new(self.cursor.current().literal.as_str()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Some(parameters)
    }
}

// Prefix rules. The always-`Some` ones keep the `PrefixRule` signature.

#[allow(clippy::unnecessary_wraps)]
pub(crate) fn identifier(p: &mut Parser<'_>) -> Option<Expression> {
    Some(Expression::ident(p.cursor.current().literal.as_str()))
}

/// Decimal literal; one that overflows `i64` is a syntax error.
pub(crate) fn integer_literal(p: &mut Parser<'_>) -> Option<Expression> {
    let literal = &p.cursor.current().literal;
    match literal.parse::<i64>() {
        Ok(value) => Some(Expression::IntegerLiteral(value)),
        Err(_) => {
            let literal = literal.clone();
            p.error(ParseError::InvalidInteger { literal });
            None
        }
    }
}

/// The scanner has already decoded the escapes.
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn string_literal(p: &mut Parser<'_>) -> Option<Expression> {
    Some(Expression::StringLiteral(p.cursor.current().literal.clone()))
}

/// `true` / `false`
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn boolean(p: &mut Parser<'_>) -> Option<Expression> {
    Some(Expression::Boolean(p.cursor.current_is(TokenKind::True)))
}

/// `!x`, `-x`
pub(crate) fn prefix_operator(p: &mut Parser<'_>) -> Option<Expression> {
    let operator = PrefixOp::from_token(p.cursor.current_kind())?;
    p.cursor.advance();
    let right = p.parse_expression(Precedence::Prefix)?;
    Some(Expression::prefix(operator, right))
}

/// `( <expr> )`
pub(crate) fn grouped(p: &mut Parser<'_>) -> Option<Expression> {
    p.cursor.advance();
    let expr = p.parse_expression(Precedence::Lowest)?;
    p.expect_peek(TokenKind::RParen)?;
    Some(expr)
}

/// `if (<cond>) { ... } [else { ... }]`
pub(crate) fn if_expression(p: &mut Parser<'_>) -> Option<Expression> {
    p.expect_peek(TokenKind::LParen)?;
    p.cursor.advance();
    let condition = p.parse_expression(Precedence::Lowest)?;
    p.expect_peek(TokenKind::RParen)?;

    p.expect_peek(TokenKind::LBrace)?;
    let consequence = p.parse_block()?;

    let alternative = if p.cursor.peek_is(TokenKind::Else) {
        p.cursor.advance();
        p.expect_peek(TokenKind::LBrace)?;
        Some(p.parse_block()?)
    } else {
        None
    };

    Some(Expression::If(IfExpression {
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

/// `fn(<params>) { ... }`
pub(crate) fn function_literal(p: &mut Parser<'_>) -> Option<Expression> {
    p.expect_peek(TokenKind::LParen)?;
    let parameters = p.parse_function_parameters()?;

    p.expect_peek(TokenKind::LBrace)?;
    let body = p.parse_block()?;

    trace!(params = parameters.len(), "function literal");
    Some(Expression::Function(Rc::new(FunctionLiteral { parameters, body })))
}

/// `[a, b, c]`
pub(crate) fn array_literal(p: &mut Parser<'_>) -> Option<Expression> {
    let elements = p.parse_expression_list(TokenKind::RBracket)?;
    Some(Expression::ArrayLiteral(elements))
}

// Infix rules

/// Binary operators recurse at their own precedence, which makes them
/// left-associative.
pub(crate) fn infix_operator(p: &mut Parser<'_>, left: Expression) -> Option<Expression> {
    let kind = p.cursor.current_kind();
    let operator = InfixOp::from_token(kind)?;
    p.cursor.advance();
    let right = p.parse_expression(Precedence::of(kind))?;
    Some(Expression::infix(left, operator, right))
}

/// `<callee>(<args>)`
pub(crate) fn call(p: &mut Parser<'_>, callee: Expression) -> Option<Expression> {
    let arguments = p.parse_expression_list(TokenKind::RParen)?;
    Some(Expression::Call {
        callee: Box::new(callee),
        arguments,
    })
}

/// `<left>[<index>]`
pub(crate) fn index(p: &mut Parser<'_>, left: Expression) -> Option<Expression> {
    p.cursor.advance();
    let index = p.parse_expression(Precedence::Lowest)?;
    p.expect_peek(TokenKind::RBracket)?;
    Some(Expression::Index {
        left: Box::new(left),
        index: Box::new(index),
    })
}
