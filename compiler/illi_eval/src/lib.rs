//! Tree-walking evaluator for Illi.
//!
//! - [`Value`]: runtime values and their display form
//! - [`Environment`]: chained scopes of variable bindings
//! - [`Interpreter`]: executes statements against a persistent global scope
//! - [`evaluate_binary`] / [`evaluate_unary`]: operator semantics
//! - [`PrintHandler`]: where `print` output goes
//!
//! A runtime error is an [`EvalError`]: the offending token plus an
//! [`EvalErrorKind`] whose `Display` is the user-facing message.

mod environment;
mod errors;
mod interpreter;
mod operators;
pub mod print_handler;
mod unary_operators;
mod value;

pub use environment::{AssignError, Binding, Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, ScopedInterpreter};
pub use operators::evaluate_binary;
pub use print_handler::{buffer_handler, stdout_handler, PrintHandler, SharedPrintHandler};
pub use unary_operators::evaluate_unary;
pub use value::Value;
