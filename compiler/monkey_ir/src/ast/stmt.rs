//! Statement nodes and the program root.

use std::borrow::Cow;
use std::fmt;

use super::{Expression, Identifier};

/// Root node: statements in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    /// An empty program.
    pub fn new() -> Self {
        Program::default()
    }

    /// Literal of the first statement's leading token, or empty.
    pub fn token_literal(&self) -> Cow<'_, str> {
        self.statements
            .first()
            .map_or(Cow::Borrowed(""), Statement::token_literal)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_statements(f, &self.statements)
    }
}

/// Statement variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl Statement {
    /// Literal of the statement's leading token.
    pub fn token_literal(&self) -> Cow<'_, str> {
        match self {
            Statement::Let(_) => Cow::Borrowed("let"),
            Statement::Return(_) => Cow::Borrowed("return"),
            Statement::Expression(stmt) => stmt.expression.token_literal(),
            Statement::Block(_) => Cow::Borrowed("{"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{stmt}"),
            Statement::Return(stmt) => write!(f, "{stmt}"),
            Statement::Expression(stmt) => write!(f, "{stmt}"),
            Statement::Block(block) => write!(f, "{{ {block} }}"),
        }
    }
}

/// `let <name> = <value>;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetStatement {
    pub name: Identifier,
    pub value: Expression,
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

/// `return <value>;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnStatement {
    pub value: Expression,
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "return {};", self.value)
    }
}

/// An expression in statement position, with an optional `;`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// A brace-delimited statement sequence.
///
/// Renders without its braces; the enclosing `if`/`fn` supplies them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        BlockStatement { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_statements(f, &self.statements)
    }
}

/// Write statements in order, separating them so the output re-parses.
///
/// `let`/`return` already end in `;`; an expression statement followed by
/// another statement gets an explicit terminator.
fn fmt_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    let mut iter = statements.iter().peekable();
    while let Some(stmt) = iter.next() {
        write!(f, "{stmt}")?;
        if iter.peek().is_some() {
            match stmt {
                Statement::Expression(_) | Statement::Block(_) => f.write_str("; ")?,
                Statement::Let(_) | Statement::Return(_) => f.write_str(" ")?,
            }
        }
    }
    Ok(())
}
