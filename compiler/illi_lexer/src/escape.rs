//! Escape Sequence Processing
//!
//! Cooks the raw body of a string literal (the text between the quotes).
//! Recognized escapes: `\"`, `\b`, `\f`, `\n`, `\r`, `\t`, `\\`

/// An escape the language does not define.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidEscape {
    /// The character after the backslash, or `None` for a trailing backslash.
    pub found: Option<char>,
}

/// Resolve a single escape character to its replacement.
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        _ => None,
    }
}

/// Cook a raw string body.
///
/// Fails on the first unrecognized escape; no partial string is produced.
pub fn cook_string(raw: &str) -> Result<String, InvalidEscape> {
    let mut cooked = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            cooked.push(c);
            continue;
        }
        match chars.next() {
            Some(esc) => match resolve_escape(esc) {
                Some(resolved) => cooked.push(resolved),
                None => return Err(InvalidEscape { found: Some(esc) }),
            },
            None => return Err(InvalidEscape { found: None }),
        }
    }

    Ok(cooked)
}
