//! Token types produced by the lexer.

use std::fmt;

/// A lexical unit: kind tag, source text, optional literal payload and line.
///
/// Tokens are created once by the lexer and never mutated afterwards.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text the token was scanned from.
    pub lexeme: String,
    /// Cooked value for `Number` and `String` tokens.
    pub literal: Option<TokenLiteral>,
    /// 1-based line of the token's first character.
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<TokenLiteral>,
        line: u32,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// Token without a literal payload.
    #[inline]
    pub fn simple(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self::new(kind, lexeme, None, line)
    }

    /// End-of-input marker on the given line.
    pub fn eof(line: u32) -> Self {
        Self::simple(TokenKind::Eof, "", line)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(
                f,
                "{:?} {:?} {:?} @ line {}",
                self.kind, self.lexeme, literal, self.line
            ),
            None => write!(f, "{:?} {:?} @ line {}", self.kind, self.lexeme, self.line),
        }
    }
}

/// Literal payload carried by `Number` and `String` tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenLiteral {
    Number(f64),
    Str(String),
}

/// Token kinds.
///
/// `repr(u8)` keeps the discriminant small enough for the parser's
/// bitset-based recovery sets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Colon,
    Question,
    Slash,
    Star,

    // One- or two-character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Reserved words
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Number of token kinds; every discriminant is below this.
    pub const COUNT: u8 = TokenKind::Eof as u8 + 1;

    /// Discriminant index, used for bitset membership.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Whether this kind is a reserved word.
    pub fn is_keyword(self) -> bool {
        (TokenKind::And.index()..=TokenKind::While.index()).contains(&self.index())
    }

    /// Human-readable name used in debug output.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::And => "and",
            TokenKind::Class => "class",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::Fun => "fun",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Nil => "nil",
            TokenKind::Or => "or",
            TokenKind::Print => "print",
            TokenKind::Return => "return",
            TokenKind::Super => "super",
            TokenKind::This => "this",
            TokenKind::True => "true",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
