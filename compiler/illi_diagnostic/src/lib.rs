//! Error reporting for the Illi interpreter.
//!
//! Every phase reports problems through one of two sinks:
//! - [`ErrorSink`] receives lexical and syntax [`Diagnostic`]s.
//! - [`RuntimeErrorSink`] receives the single runtime error that ends an
//!   `interpret` call.
//!
//! Two implementations ship with the crate: [`DiagnosticQueue`] keeps
//! everything in memory (tests, embedding) and
//! [`emitter::TerminalEmitter`] writes to a terminal. Both track the
//! `had_error` / `had_runtime_error` flags the driver uses to pick an exit
//! code.
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] can only be obtained by emitting through a runtime
//! sink, so a function returning `Result<_, ErrorGuaranteed>` has provably
//! reported its failure.

mod diagnostic;
pub mod emitter;
mod error_code;
mod guarantee;
mod queue;
mod sink;

pub use diagnostic::{Diagnostic, Location};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticQueue, RuntimeReport};
pub use sink::{ErrorSink, RuntimeErrorSink};
