//! Expression nodes.
//!
//! Every subtree is exclusively owned by its parent (`Box`/`Vec`), so the
//! AST is a strict tree. The one shared node is `FunctionLiteral`: function
//! values created at runtime hold an `Rc` to the same literal instead of
//! copying its body.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use super::{BlockStatement, InfixOp, PrefixOp};

/// An identifier reference or binding name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(i64),
    StringLiteral(String),
    Boolean(bool),
    Prefix {
        operator: PrefixOp,
        right: Box<Expression>,
    },
    Infix {
        operator: InfixOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    If(IfExpression),
    Function(Rc<FunctionLiteral>),
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    ArrayLiteral(Vec<Expression>),
    Index {
        left: Box<Expression>,
        index: Box<Expression>,
    },
}

impl Expression {
    /// Shorthand for an identifier reference.
    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    /// Build `<operator><right>`.
    pub fn prefix(operator: PrefixOp, right: Expression) -> Self {
        Expression::Prefix {
            operator,
            right: Box::new(right),
        }
    }

    /// Build `<left> <operator> <right>`.
    pub fn infix(left: Expression, operator: InfixOp, right: Expression) -> Self {
        Expression::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Literal text of the token this expression starts with (or, for
    /// operator nodes, the operator token).
    pub fn token_literal(&self) -> Cow<'_, str> {
        match self {
            Expression::Identifier(ident) => Cow::Borrowed(ident.as_str()),
            Expression::IntegerLiteral(value) => Cow::Owned(value.to_string()),
            Expression::StringLiteral(value) => Cow::Borrowed(value),
            Expression::Boolean(true) => Cow::Borrowed("true"),
            Expression::Boolean(false) => Cow::Borrowed("false"),
            Expression::Prefix { operator, .. } => Cow::Borrowed(operator.as_symbol()),
            Expression::Infix { operator, .. } => Cow::Borrowed(operator.as_symbol()),
            Expression::If(_) => Cow::Borrowed("if"),
            Expression::Function(_) => Cow::Borrowed("fn"),
            Expression::Call { .. } => Cow::Borrowed("("),
            Expression::ArrayLiteral(_) | Expression::Index { .. } => Cow::Borrowed("["),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::IntegerLiteral(value) => write!(f, "{value}"),
            Expression::StringLiteral(value) => fmt_quoted(f, value),
            Expression::Boolean(value) => write!(f, "{value}"),
            Expression::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Expression::Infix {
                operator,
                left,
                right,
            } => write!(f, "({left} {operator} {right})"),
            Expression::If(expr) => write!(f, "{expr}"),
            Expression::Function(literal) => write!(f, "{literal}"),
            Expression::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                fmt_comma_list(f, arguments)?;
                f.write_str(")")
            }
            Expression::ArrayLiteral(elements) => {
                f.write_str("[")?;
                fmt_comma_list(f, elements)?;
                f.write_str("]")
            }
            Expression::Index { left, index } => write!(f, "({left}[{index}])"),
        }
    }
}

/// `if (<condition>) { <consequence> } else { <alternative> }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfExpression {
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl fmt::Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if ({}) {{ {} }}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, " else {{ {alternative} }}")?;
        }
        Ok(())
    }
}

/// `fn(<params>) { <body> }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        fmt_comma_list(f, &self.parameters)?;
        write!(f, ") {{ {} }}", self.body)
    }
}

/// Write `items` separated by `", "`.
fn fmt_comma_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Write a string literal back in source form, re-escaping what the
/// scanner decodes.
fn fmt_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}
