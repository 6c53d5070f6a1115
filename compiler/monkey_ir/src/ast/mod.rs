//! Abstract syntax tree.
//!
//! - `stmt.rs`: `Program` and the statement variants
//! - `expr.rs`: expression variants, `IfExpression`, `FunctionLiteral`
//! - `operators.rs`: `PrefixOp` / `InfixOp`

mod expr;
mod operators;
mod stmt;


pub use expr::{Expression, FunctionLiteral, Identifier, IfExpression};
pub use operators::{InfixOp, PrefixOp};
pub use stmt::{
    BlockStatement, ExpressionStatement, LetStatement, Program, ReturnStatement, Statement,
};
