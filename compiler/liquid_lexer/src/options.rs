//! Construction-time tokenizer configuration.

/// How a [`Tokenizer`](crate::Tokenizer) scans and counts lines.
///
/// The default scans ordinary template source with no line tracking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Track line numbers, starting at 1 unless `line_number` says otherwise.
    pub line_numbers: bool,
    /// Explicit starting line. Setting it enables tracking on its own.
    pub line_number: Option<u32>,
    /// Treat each source line as one token (body of a `{% liquid %}` tag).
    pub for_liquid_tag: bool,
}

impl TokenizerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable line tracking.
    #[must_use]
    pub fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    /// Start counting at `line` (enables tracking).
    #[must_use]
    pub fn starting_at_line(mut self, line: u32) -> Self {
        self.line_number = Some(line);
        self
    }

    /// Split on newlines instead of scanning for markers.
    #[must_use]
    pub fn for_liquid_tag(mut self, enabled: bool) -> Self {
        self.for_liquid_tag = enabled;
        self
    }

    /// The line number a fresh tokenizer reports before any token is shifted.
    pub fn initial_line_number(&self) -> Option<u32> {
        self.line_number.or(self.line_numbers.then_some(1))
    }
}
