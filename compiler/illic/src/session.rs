//! One interpreter plus the sink it reports to.

use std::io;
use std::path::Path;

use illi_diagnostic::{ErrorSink, RuntimeErrorSink};
use illi_eval::{stdout_handler, Interpreter, SharedPrintHandler};
use tracing::debug;

use crate::exit_code;

/// A sink for every kind of error the pipeline reports.
pub trait Reporter: ErrorSink + RuntimeErrorSink {}

impl<T: ErrorSink + RuntimeErrorSink> Reporter for T {}

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Lexical or syntax errors were reported; nothing was executed.
    SyntaxError,
    /// Execution stopped at a runtime error.
    RuntimeError,
}

impl Outcome {
    /// Process exit status for a script that ended this way.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::SyntaxError => exit_code::DATA_ERR,
            Outcome::RuntimeError => exit_code::SOFTWARE,
        }
    }
}

/// Runs source text against a persistent interpreter.
///
/// Definitions made by one [`run`](Self::run) or [`run_line`](Self::run_line)
/// are visible to the next.
pub struct Session<R> {
    interpreter: Interpreter,
    reporter: R,
}

impl<R: Reporter> Session<R> {
    /// Session printing program output to stdout.
    pub fn new(reporter: R) -> Self {
        Self::with_print_handler(reporter, stdout_handler())
    }

    pub fn with_print_handler(reporter: R, print_handler: SharedPrintHandler) -> Self {
        Session {
            interpreter: Interpreter::with_print_handler(print_handler),
            reporter,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Run a whole program.
    ///
    /// The program is executed only if lexing and parsing reported nothing.
    pub fn run(&mut self, source: &str) -> Outcome {
        self.run_source(source, false)
    }

    /// Run one line of REPL input.
    ///
    /// A trailing expression statement has its value printed. The
    /// syntax-error flag is cleared afterwards so the next line starts
    /// clean; a runtime error does not end the session.
    pub fn run_line(&mut self, line: &str) -> Outcome {
        let outcome = self.run_source(line, true);
        self.reporter.reset_errors();
        outcome
    }

    fn run_source(&mut self, source: &str, echo: bool) -> Outcome {
        let tokens = illi_lexer::lex(source, &mut self.reporter);
        let program = illi_parse::parse(&tokens, &mut self.reporter);

        if self.reporter.had_error() {
            debug!(tokens = tokens.len(), "syntax errors; not executing");
            return Outcome::SyntaxError;
        }

        debug!(statements = program.len(), echo, "executing");
        let result = if echo {
            self.interpreter.interpret_repl(&program, &mut self.reporter)
        } else {
            self.interpreter.interpret(&program, &mut self.reporter)
        };
        match result {
            Ok(()) => Outcome::Success,
            Err(_guaranteed) => Outcome::RuntimeError,
        }
    }
}

/// Read the file at `path` and run it as a whole program.
///
/// An unreadable file (including one that is not UTF-8) is returned as
/// `Err` without anything being reported to the session.
pub fn run_script<R: Reporter>(session: &mut Session<R>, path: &Path) -> io::Result<Outcome> {
    let source = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = source.len(), "running script");
    Ok(session.run(&source))
}
