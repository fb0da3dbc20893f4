//! Grammar productions, split by category.
//!
//! - `stmt.rs`: declarations, statements and blocks
//! - `expr/`: the expression precedence chain

mod expr;
mod stmt;
