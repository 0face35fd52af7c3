//! Eager template tokenizer.
//!
//! [`Tokenizer::new`] scans the whole source up front and keeps only the
//! resulting spans. The scanner is dropped as soon as scanning finishes;
//! the tokens borrow the caller's buffer and nothing else.
//!
//! # Scanning
//!
//! At top level the next token is a tag (`{%`), a variable (`{{`), or text
//! running up to the next of either. Variables are quote-aware: `}}` and
//! `{%` inside a `"..."` or `'...'` string do not end them. Tags are not:
//! the first `%}` closes the tag. A tag whose body starts with `raw`
//! switches to raw mode, where everything up to the matching `endraw` tag
//! is a single text token.
//!
//! Unterminated markers degrade instead of failing:
//!
//! - `{{` with no closing `}}` becomes the token `{{` and the rest of the
//!   source is dropped.
//! - `{%` with no closing `%}` becomes the token `{%` and scanning resumes
//!   right after it.
//! - A raw block with no `endraw` swallows the rest of the source as text.
//! - `{%` appearing unquoted inside a variable turns the variable into a
//!   tag scan from the original `{{`. The parser rejects it later.

use std::collections::VecDeque;

use liquid_lexer_core::{Pattern, Scanner, Source, TagName};
use tracing::{debug, trace};

use crate::{LexError, Token, TokenizerOptions};

const TAG_OR_VARIABLE_START: Pattern<'static> = Pattern::LeadThenAny {
    lead: OPEN_CURLY,
    follow: b"{%",
};
const VARIABLE_CHARACTER_STOPS: Pattern<'static> = Pattern::AnyOf(b"\\\"'}{");
const TAG_START: Pattern<'static> = Pattern::Literal(b"{%");
const TAG_END: Pattern<'static> = Pattern::Literal(b"%}");
const RAW_TAG_LEADING: TagName<'static> = TagName(b"raw");
const ENDRAW_TAG_LEADING: TagName<'static> = TagName(b"endraw");

const OPEN_CURLY: u8 = b'{';
const CLOSE_CURLY: u8 = b'}';
const PERCENTAGE: u8 = b'%';
const DOUBLE_QUOTE: u8 = b'"';
const SINGLE_QUOTE: u8 = b'\'';
const ESCAPE: u8 = b'\\';

/// Tokens of one template, consumed front to back.
#[derive(Clone, Debug)]
pub struct Tokenizer<'src> {
    tokens: VecDeque<Token<'src>>,
    line_number: Option<u32>,
    for_liquid_tag: bool,
}

impl<'src> Tokenizer<'src> {
    /// Tokenize `source` completely.
    ///
    /// Fails only if the source contains text and is not valid in its
    /// declared encoding. The first text scan checks the whole buffer, so a
    /// bad byte inside a tag, variable, or raw block fails too. A source
    /// made only of tags and variables is never checked.
    #[tracing::instrument(level = "debug", skip_all, fields(
        len = source.len(),
        for_liquid_tag = options.for_liquid_tag,
    ))]
    pub fn new(source: Source<'src>, options: TokenizerOptions) -> Result<Self, LexError> {
        let tokens = if options.for_liquid_tag {
            split_lines(source.as_bytes())
        } else {
            TokenScanner::new(source).scan()?
        };
        debug!(count = tokens.len(), "tokenized");

        Ok(Self {
            tokens: tokens.into(),
            line_number: options.initial_line_number(),
            for_liquid_tag: options.for_liquid_tag,
        })
    }

    /// Tokenize UTF-8 text.
    pub fn from_text(text: &'src str, options: TokenizerOptions) -> Result<Self, LexError> {
        Self::new(Source::utf8(text), options)
    }

    /// A tokenizer with no source. Yields nothing.
    pub fn empty(options: TokenizerOptions) -> Self {
        Self {
            tokens: VecDeque::new(),
            line_number: options.initial_line_number(),
            for_liquid_tag: options.for_liquid_tag,
        }
    }

    /// Pop the next token, or `None` once every token has been returned.
    ///
    /// [`line_number`](Self::line_number) reports the line the returned
    /// token starts on when read *before* this call. Afterwards it has
    /// moved past the token: by one line in liquid-tag mode, otherwise by
    /// the number of newlines in the token.
    pub fn shift(&mut self) -> Option<Token<'src>> {
        let token = self.tokens.pop_front()?;

        if let Some(line) = self.line_number.as_mut() {
            let advance = if self.for_liquid_tag {
                1
            } else {
                u32::try_from(token.newline_count()).unwrap_or(u32::MAX)
            };
            *line = line.saturating_add(advance);
        }

        Some(token)
    }

    /// Current line, or `None` when line tracking is off.
    pub fn line_number(&self) -> Option<u32> {
        self.line_number
    }

    /// Whether this tokenizer splits on lines (`{% liquid %}` tag body).
    pub fn for_liquid_tag(&self) -> bool {
        self.for_liquid_tag
    }

    /// Number of tokens not yet shifted.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.shift()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tokens.len(), Some(self.tokens.len()))
    }
}

/// Split on `\n`, dropping trailing empty lines.
fn split_lines(bytes: &[u8]) -> Vec<Token<'_>> {
    let mut lines: Vec<Token<'_>> = bytes.split(|&b| b == b'\n').map(Token::new).collect();
    while lines.last().is_some_and(Token::is_empty) {
        lines.pop();
    }
    lines
}

/// Quote state while scanning one variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuoteState {
    Unquoted,
    InDouble,
    InSingle,
}

impl QuoteState {
    /// Transition on seeing the quote byte that opens/closes `quote`.
    fn toggle(self, quote: QuoteState) -> Self {
        match self {
            QuoteState::Unquoted => quote,
            current if current == quote => QuoteState::Unquoted,
            current => current,
        }
    }
}

/// Single-use scan state. Consumed by [`TokenScanner::scan`].
struct TokenScanner<'src> {
    scanner: Scanner<'src>,
    tokens: Vec<Token<'src>>,
    /// Set once the whole buffer has passed encoding validation.
    validated: bool,
}

impl<'src> TokenScanner<'src> {
    fn new(source: Source<'src>) -> Self {
        Self {
            scanner: Scanner::new(source),
            tokens: Vec::new(),
            validated: false,
        }
    }

    fn scan(mut self) -> Result<Vec<Token<'src>>, LexError> {
        while !self.scanner.is_eof() {
            self.scan_top_level_token()?;
        }
        Ok(self.tokens)
    }

    fn scan_top_level_token(&mut self) -> Result<(), LexError> {
        if self.scanner.peek_byte() == Some(OPEN_CURLY) {
            self.scanner.scan_byte();

            match self.scanner.peek_byte() {
                Some(PERCENTAGE) => {
                    self.scanner.scan_byte();
                    let raw_tag = self.scanner.match_leading(RAW_TAG_LEADING);
                    let tag = self.scan_tag_token(self.scanner.pos() - 2);
                    self.tokens.push(tag);
                    if raw_tag {
                        self.scan_raw_content_and_endraw_token();
                    }
                    return Ok(());
                }
                Some(OPEN_CURLY) => {
                    self.scanner.scan_byte();
                    let variable = self.scan_variable_token();
                    self.tokens.push(variable);
                    return Ok(());
                }
                _ => self.scanner.set_pos(self.scanner.pos() - 1),
            }
        }

        let text = self.scan_text_token()?;
        self.tokens.push(text);
        Ok(())
    }

    /// Text up to the next `{{` or `{%`, or to the end of input.
    fn scan_text_token(&mut self) -> Result<Token<'src>, LexError> {
        self.validate_source()?;
        let start = self.scanner.pos();

        if self.scanner.skip_until(TAG_OR_VARIABLE_START).is_none() {
            return Ok(Token::new(self.scanner.slice_from(start)));
        }

        let end = self.scanner.pos() - 2;
        self.scanner.set_pos(end);
        Ok(Token::new(self.scanner.slice(start, end)))
    }

    /// Check the entire buffer against its encoding, once.
    fn validate_source(&mut self) -> Result<(), LexError> {
        if !self.validated {
            self.scanner.validate(0, self.scanner.source_len())?;
            self.validated = true;
        }
        Ok(())
    }

    /// Called with the cursor just past `{{`.
    fn scan_variable_token(&mut self) -> Token<'src> {
        let start = self.scanner.pos() - 2;
        let mut quote = QuoteState::Unquoted;

        while !self.scanner.is_eof() {
            // On a miss `skip_until` has already moved to the end.
            let Some(byte) = self.skip_to_byte(VARIABLE_CHARACTER_STOPS) else {
                break;
            };

            match byte {
                ESCAPE => {
                    if quote != QuoteState::Unquoted {
                        self.scanner.set_pos(self.scanner.pos() + 1);
                    }
                }
                DOUBLE_QUOTE => quote = quote.toggle(QuoteState::InDouble),
                SINGLE_QUOTE => quote = quote.toggle(QuoteState::InSingle),
                CLOSE_CURLY => {
                    if quote == QuoteState::Unquoted
                        && self.scanner.peek_byte() == Some(CLOSE_CURLY)
                    {
                        self.scanner.scan_byte();
                        return Token::new(self.scanner.slice_from(start));
                    }
                }
                OPEN_CURLY => {
                    if quote == QuoteState::Unquoted
                        && self.scanner.peek_byte() == Some(PERCENTAGE)
                    {
                        trace!(start, "`{{%` inside variable, rescanning as tag");
                        self.scanner.scan_byte();
                        return self.scan_tag_token(start);
                    }
                }
                _ => {}
            }
        }

        trace!(start, "unterminated variable");
        Token::UNTERMINATED_VARIABLE
    }

    /// Scan to `%}` from the cursor; the token starts at `start`.
    ///
    /// The token is `start .. start + n + 2`, where `n` is the number of
    /// bytes consumed from the cursor through `%}`. For a tag opened right
    /// before the cursor that is exactly the span through `%}`.
    fn scan_tag_token(&mut self, start: usize) -> Token<'src> {
        let resume = self.scanner.pos();

        match self.scanner.skip_until(TAG_END) {
            Some(consumed) => Token::new(self.scanner.slice(start, start + consumed + 2)),
            None => {
                trace!(start, "unterminated tag");
                self.scanner.set_pos(resume);
                Token::UNTERMINATED_TAG
            }
        }
    }

    /// Called right after a `raw` tag token.
    fn scan_raw_content_and_endraw_token(&mut self) {
        let start = self.scanner.pos();

        while self.scanner.skip_until(TAG_START).is_some() {
            if !self.scanner.match_leading(ENDRAW_TAG_LEADING) {
                continue;
            }

            let tag_start = self.scanner.pos() - 2;
            if start < tag_start {
                self.tokens
                    .push(Token::new(self.scanner.slice(start, tag_start)));
            }
            let endraw = self.scan_tag_token(tag_start);
            self.tokens.push(endraw);
            return;
        }

        trace!(start, "unterminated raw block");
        self.tokens.push(Token::new(self.scanner.slice_from(start)));
        self.scanner.terminate();
    }

    /// Skip past the next byte matching `pattern` and return it.
    fn skip_to_byte(&mut self, pattern: Pattern<'_>) -> Option<u8> {
        self.scanner.skip_until(pattern)?;
        self.scanner.set_pos(self.scanner.pos() - 1);
        self.scanner.scan_byte()
    }
}
