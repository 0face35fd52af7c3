//! Token spans and the two-byte classification convention.

use std::fmt;

/// What a token is, judged by its first two bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Plain template text.
    Literal,
    /// Starts with `{%`.
    Tag,
    /// Starts with `{{`.
    Variable,
}

impl TokenKind {
    /// Classify a span by its leading bytes.
    ///
    /// This is the contract with the parser: `{{` is a variable, `{%` is a
    /// tag, anything else (including spans shorter than two bytes) is text.
    pub fn of(bytes: &[u8]) -> Self {
        match bytes {
            [b'{', b'{', ..] => TokenKind::Variable,
            [b'{', b'%', ..] => TokenKind::Tag,
            _ => TokenKind::Literal,
        }
    }
}

/// A contiguous span of template source.
///
/// Borrowed from the caller's buffer, never copied. The fallback tokens
/// for unterminated markers are the static two-byte strings `{{` and `{%`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src>(&'src [u8]);

impl<'src> Token<'src> {
    /// Fallback for a `{{` that never closes.
    pub(crate) const UNTERMINATED_VARIABLE: Token<'static> = Token(b"{{");
    /// Fallback for a `{%` that never closes.
    pub(crate) const UNTERMINATED_TAG: Token<'static> = Token(b"{%");

    pub(crate) const fn new(bytes: &'src [u8]) -> Self {
        Token(bytes)
    }

    /// The raw bytes of the span.
    pub const fn as_bytes(&self) -> &'src [u8] {
        self.0
    }

    /// The span as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&'src str> {
        std::str::from_utf8(self.0).ok()
    }

    /// Classification by leading bytes.
    pub fn kind(&self) -> TokenKind {
        TokenKind::of(self.0)
    }

    /// Length in bytes.
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of `\n` bytes in the span.
    pub fn newline_count(&self) -> usize {
        memchr::memchr_iter(b'\n', self.0).count()
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token(\"{}\")", self.0.escape_ascii())
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.0))
    }
}

impl AsRef<[u8]> for Token<'_> {
    fn as_ref(&self) -> &[u8] {
        self.0
    }
}

impl PartialEq<[u8]> for Token<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}
