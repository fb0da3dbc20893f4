use std::fmt;

use crate::ErrorCode;

/// Where on its line a diagnostic points.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Location {
    /// Lexer errors: the line alone identifies the problem.
    Line,
    /// The parser ran into the end of input.
    AtEnd,
    /// The parser rejected this lexeme.
    AtLexeme(String),
}

impl fmt::Display for Location {
    /// Renders the `where` fragment of `[line N] Error<where>: message`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Line => Ok(()),
            Location::AtEnd => f.write_str(" at end"),
            Location::AtLexeme(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}

/// A lexical or syntax error.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    /// 1-based source line.
    pub line: u32,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    /// Diagnostic located by line only.
    pub fn new(code: ErrorCode, line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            line,
            location: Location::Line,
            message: message.into(),
        }
    }

    /// Point the diagnostic at a location on its line.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// The `where` fragment as an owned string.
    pub fn location_text(&self) -> String {
        self.location.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.location, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lexer_diagnostic_has_no_where() {
        let diag = Diagnostic::new(ErrorCode::E0002, 3, "Unexpected character.");
        assert_eq!(diag.to_string(), "[line 3] Error: Unexpected character.");
        assert_eq!(diag.location_text(), "");
    }

    #[test]
    fn parser_diagnostic_names_lexeme_or_end() {
        let at_lexeme = Diagnostic::new(ErrorCode::E1002, 1, "Expect expression.")
            .with_location(Location::AtLexeme(")".into()));
        assert_eq!(at_lexeme.to_string(), "[line 1] Error at ')': Expect expression.");

        let at_end = Diagnostic::new(ErrorCode::E1001, 2, "Expected ';' after value.")
            .with_location(Location::AtEnd);
        assert_eq!(
            at_end.to_string(),
            "[line 2] Error at end: Expected ';' after value."
        );
    }
}
