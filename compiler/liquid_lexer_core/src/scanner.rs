//! Cursor over a borrowed template buffer.
//!
//! The scanner never allocates. Every accessor returns a byte, a length,
//! or a slice of the original buffer. The cursor only moves forward,
//! except through [`Scanner::set_pos`], which callers use for small,
//! controlled rewinds.

use crate::{Encoding, InvalidByteSequence, Pattern, Source, TagName};

/// Byte cursor over a [`Source`].
///
/// The scanner is [`Copy`], so a snapshot of its state is a plain copy.
///
/// # Invariant
///
/// `pos <= bytes.len()` at all times.
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'src> {
    bytes: &'src [u8],
    encoding: Encoding,
    pos: usize,
}

impl<'src> Scanner<'src> {
    /// Create a scanner at position 0.
    pub fn new(source: Source<'src>) -> Self {
        Self {
            bytes: source.as_bytes(),
            encoding: source.encoding(),
            pos: 0,
        }
    }

    /// The byte at the cursor, or `None` at end of input.
    #[inline]
    pub fn peek_byte(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Return the byte at the cursor and advance past it.
    #[inline]
    pub fn scan_byte(&mut self) -> Option<u8> {
        let byte = self.peek_byte()?;
        self.pos += 1;
        Some(byte)
    }

    /// Advance to just past the first occurrence of `pattern`.
    ///
    /// Returns the number of bytes consumed, pattern included. If the
    /// pattern does not occur in the rest of the input, the cursor moves
    /// to end of input and `None` is returned.
    pub fn skip_until(&mut self, pattern: Pattern<'_>) -> Option<usize> {
        match pattern.find(self.rest()) {
            Some((offset, len)) => {
                let consumed = offset + len;
                self.pos += consumed;
                Some(consumed)
            }
            None => {
                self.terminate();
                None
            }
        }
    }

    /// Returns `true` if `name` matches at the cursor. Consumes nothing.
    pub fn match_leading(&self, name: TagName<'_>) -> bool {
        name.match_prefix(self.rest(), self.encoding).is_some()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Jump to `pos`, clamped to the end of input.
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.bytes.len());
    }

    /// Force the cursor to end of input.
    #[inline]
    pub fn terminate(&mut self) {
        self.pos = self.bytes.len();
    }

    /// The unconsumed bytes.
    #[inline]
    pub fn rest(&self) -> &'src [u8] {
        &self.bytes[self.pos..]
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Bytes `start..end` of the source, clamped to the end of input.
    ///
    /// # Contract
    ///
    /// `start <= end`.
    pub fn slice(&self, start: usize, end: usize) -> &'src [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        let len = self.bytes.len();
        &self.bytes[start.min(len)..end.min(len)]
    }

    /// Bytes from `start` to the cursor.
    pub fn slice_from(&self, start: usize) -> &'src [u8] {
        self.slice(start, self.pos)
    }

    /// Check bytes `start..end` against the declared encoding.
    ///
    /// The error's `offset` is absolute within the source.
    pub fn validate(&self, start: usize, end: usize) -> Result<(), InvalidByteSequence> {
        self.encoding
            .validate(self.slice(start, end))
            .map_err(|err| InvalidByteSequence {
                offset: start + err.offset,
                ..err
            })
    }
}
