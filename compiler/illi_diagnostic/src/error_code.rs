use std::fmt;

/// Error codes for lexical and syntax diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Invalid escape sequence in a string literal
    E0005,

    // Parser Errors (E1xxx)
    /// Unexpected token where a specific token was required
    E1001,
    /// Expected expression
    E1002,
    /// Expected identifier
    E1004,
    /// Invalid assignment target
    E1010,
    /// Binary operator with no left-hand operand
    E1011,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0005,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1004,
        ErrorCode::E1010,
        ErrorCode::E1011,
    ];

    /// Look up a code by its `E####` spelling (case-insensitive).
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(code.trim()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
        }
    }

    /// Whether this code belongs to the lexer.
    pub fn is_lexer_error(self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Whether this code belongs to the parser.
    pub fn is_parser_error(self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// One-line explanation, printed by `illi --explain <code>`.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "a string literal reached the end of input before its closing quote",
            ErrorCode::E0002 => "a character that cannot start any token",
            ErrorCode::E0005 => "an escape other than \\\" \\b \\f \\n \\r \\t \\\\ inside a string",
            ErrorCode::E1001 => "a required token such as `;`, `)` or `}` is missing",
            ErrorCode::E1002 => "an expression was expected",
            ErrorCode::E1004 => "a variable name was expected after `var` or `,`",
            ErrorCode::E1010 => "the left side of `=` is not a variable",
            ErrorCode::E1011 => "a binary operator appears with nothing on its left",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_is_derived_from_the_code_prefix() {
        assert!(ErrorCode::E0001.is_lexer_error());
        assert!(!ErrorCode::E0001.is_parser_error());
        assert!(ErrorCode::E1011.is_parser_error());
        assert!(!ErrorCode::E1011.is_lexer_error());
    }

    #[test]
    fn parse_round_trips_every_code() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::parse(code.as_str()), Some(code));
        }
        assert_eq!(ErrorCode::parse("e1010"), Some(ErrorCode::E1010));
        assert_eq!(ErrorCode::parse("E9999"), None);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ErrorCode::E1002.to_string(), "E1002");
        assert_eq!(format!("{}", ErrorCode::E0005), ErrorCode::E0005.as_str());
    }
}
