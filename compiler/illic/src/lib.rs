//! The Illi interpreter driver.
//!
//! Glues the phases together for the `illi` binary:
//! - [`cli`]: command line parsing
//! - [`Session`]: lex, parse and interpret against one persistent
//!   interpreter, reporting through a diagnostic sink
//! - [`run_prompt`]: the interactive read-eval-print loop
//! - [`init_tracing`]: opt-in `tracing` output controlled by `ILLI_LOG`
//!
//! The binary is a thin shell over this library so that everything except
//! process exit can be tested in-process.

pub mod cli;
mod repl;
mod session;
mod tracing_setup;

pub use repl::{run_prompt, BANNER, EXIT_COMMAND, PROMPT};
pub use session::{run_script, Outcome, Reporter, Session};
pub use tracing_setup::init_tracing;

/// Process exit statuses, following the BSD `sysexits` convention.
pub mod exit_code {
    /// Bad command line.
    pub const USAGE: u8 = 64;
    /// The script had lexical or syntax errors.
    pub const DATA_ERR: u8 = 65;
    /// The script could not be read.
    pub const NO_INPUT: u8 = 66;
    /// The script failed at runtime.
    pub const SOFTWARE: u8 = 70;
    /// Reading the terminal or writing the prompt failed.
    pub const IO_ERR: u8 = 74;
}

/// Text printed by `illi --explain <code>`, or `None` for an unknown code.
pub fn explain(code: &str) -> Option<String> {
    let code = illi_diagnostic::ErrorCode::parse(code)?;
    let phase = if code.is_lexer_error() {
        "lexical error"
    } else {
        "syntax error"
    };
    Some(format!("{code} ({phase}): {}", code.description()))
}
