//! Grammar productions.
//!
//! - `stmt.rs`: statement dispatch, `let`, `return`, blocks
//! - `expr.rs`: the Pratt loop and every prefix/infix rule

pub(crate) mod expr;
mod stmt;
