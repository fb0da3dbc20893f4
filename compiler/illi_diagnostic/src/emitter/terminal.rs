//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::{Diagnostic, ErrorSink, RuntimeErrorSink};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const LINE: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse the value of a `--color=` flag.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes diagnostics as they arrive and remembers whether any were written.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    had_error: bool,
    had_runtime_error: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            had_error: false,
            had_runtime_error: false,
        }
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line_marker(&mut self, line: u32) {
        if self.colors {
            let _ = write!(self.writer, "{}[line {line}]{} ", colors::LINE, colors::RESET);
        } else {
            let _ = write!(self.writer, "[line {line}] ");
        }
    }

    fn write_error_label(&mut self) {
        if self.colors {
            let _ = write!(self.writer, "{}Error{}", colors::ERROR, colors::RESET);
        } else {
            let _ = write!(self.writer, "Error");
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> ErrorSink for TerminalEmitter<W> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.had_error = true;
        self.write_line_marker(diagnostic.line);
        self.write_error_label();
        let _ = writeln!(
            self.writer,
            "{}: {}",
            diagnostic.location, diagnostic.message
        );
        let _ = self.writer.flush();
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn reset_errors(&mut self) {
        self.had_error = false;
    }
}

impl<W: Write> RuntimeErrorSink for TerminalEmitter<W> {
    fn report_runtime(&mut self, line: u32, lexeme: &str, message: &str) {
        self.had_runtime_error = true;
        self.write_line_marker(line);
        self.write_error_label();
        let _ = writeln!(self.writer, " at '{lexeme}'");
        let _ = writeln!(self.writer, "{message}");
        let _ = self.writer.flush();
    }

    fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }
}

#[cfg(test)]
mod tests;
