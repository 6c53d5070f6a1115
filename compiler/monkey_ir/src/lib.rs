//! Monkey IR - tokens and syntax tree types.
//!
//! This crate holds the data shared by every phase of the interpreter:
//! - `Token` / `TokenKind` produced by the scanner
//! - `TokenSource`, the pull-based scanner contract the parser consumes
//! - AST nodes (`Program`, `Statement`, `Expression`, ...) and operators
//!
//! Every AST node renders back to source text through `Display`. Operator
//! expressions render fully parenthesized, so the rendering doubles as a
//! precedence dump in parser tests.

pub mod ast;
mod token;

pub use ast::{
    BlockStatement, Expression, ExpressionStatement, FunctionLiteral, Identifier, IfExpression,
    InfixOp, LetStatement, PrefixOp, Program, ReturnStatement, Statement,
};
pub use token::{Token, TokenKind, TokenSource, TokenStream};
