//! Sink traits implemented by whatever hosts the interpreter.

use crate::{Diagnostic, ErrorGuaranteed};

/// Receives lexical and syntax errors.
///
/// Implementations are expected to remember that an error happened; the
/// driver consults that flag to decide whether to run the program.
pub trait ErrorSink {
    fn report(&mut self, diagnostic: Diagnostic);

    /// Whether any diagnostic has been reported since the last reset.
    fn had_error(&self) -> bool;

    /// Clear the syntax-error flag (REPL: once per input line).
    fn reset_errors(&mut self);
}

/// Receives the runtime error that aborts an `interpret` call.
pub trait RuntimeErrorSink {
    fn report_runtime(&mut self, line: u32, lexeme: &str, message: &str);

    /// Whether a runtime error has been reported.
    fn had_runtime_error(&self) -> bool;

    /// Report and hand back proof of having done so.
    fn emit_runtime(&mut self, line: u32, lexeme: &str, message: &str) -> ErrorGuaranteed {
        self.report_runtime(line, lexeme, message);
        ErrorGuaranteed::new()
    }
}
