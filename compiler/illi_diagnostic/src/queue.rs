//! In-memory sink used by tests and by hosts that render errors themselves.

use crate::{Diagnostic, ErrorSink, RuntimeErrorSink};

/// A runtime error as handed to [`RuntimeErrorSink::report_runtime`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RuntimeReport {
    pub line: u32,
    pub lexeme: String,
    pub message: String,
}

/// Collects diagnostics in the order they were reported.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// let tokens = illi_lexer::lex(source, &mut queue);
/// let program = illi_parse::parse(&tokens, &mut queue);
/// if !queue.had_error() { interpreter.interpret(&program, &mut queue); }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    runtime_errors: Vec<RuntimeReport>,
    /// Lexical/syntax errors since the last `reset_errors`.
    pending_errors: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every lexical/syntax diagnostic, oldest first.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Every runtime error, oldest first.
    pub fn runtime_errors(&self) -> &[RuntimeReport] {
        &self.runtime_errors
    }

    /// Total lexical/syntax diagnostics ever reported.
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Rendered diagnostic lines, convenient for assertions.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    /// Drain all collected diagnostics and clear both flags.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.pending_errors = 0;
        self.runtime_errors.clear();
        std::mem::take(&mut self.diagnostics)
    }
}

impl ErrorSink for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.pending_errors += 1;
        self.diagnostics.push(diagnostic);
    }

    fn had_error(&self) -> bool {
        self.pending_errors > 0
    }

    /// Already collected diagnostics are kept.
    fn reset_errors(&mut self) {
        self.pending_errors = 0;
    }
}

impl RuntimeErrorSink for DiagnosticQueue {
    fn report_runtime(&mut self, line: u32, lexeme: &str, message: &str) {
        self.runtime_errors.push(RuntimeReport {
            line,
            lexeme: lexeme.to_owned(),
            message: message.to_owned(),
        });
    }

    fn had_runtime_error(&self) -> bool {
        !self.runtime_errors.is_empty()
    }
}

#[cfg(test)]
mod tests;
