//! Declared text encodings and span validation.

use std::fmt;

use thiserror::Error;

/// Text encoding a [`Source`](crate::Source) is declared in.
///
/// The names returned by [`Encoding::name`] are the ones reported in
/// error messages, e.g. `Invalid byte sequence in UTF-8`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// UTF-8 text. The default for sources built from `&str`.
    #[default]
    Utf8,
    /// 7-bit ASCII. Any byte above `0x7F` is invalid.
    UsAscii,
    /// Opaque bytes. Every byte sequence is valid.
    Binary,
}

impl Encoding {
    /// Canonical name of this encoding.
    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::UsAscii => "US-ASCII",
            Encoding::Binary => "ASCII-8BIT",
        }
    }

    /// Check that `bytes` is well-formed under this encoding.
    ///
    /// On failure the returned error's `offset` is relative to the start
    /// of `bytes`.
    pub fn validate(self, bytes: &[u8]) -> Result<(), InvalidByteSequence> {
        let invalid_at = match self {
            Encoding::Utf8 => simdutf8::compat::from_utf8(bytes)
                .err()
                .map(|err| err.valid_up_to()),
            Encoding::UsAscii => bytes.iter().position(|b| !b.is_ascii()),
            Encoding::Binary => None,
        };
        match invalid_at {
            Some(offset) => Err(InvalidByteSequence {
                encoding: self,
                offset,
            }),
            None => Ok(()),
        }
    }

    /// Returns `true` if `bytes` starts with a word character (`\w`).
    ///
    /// ASCII alphanumerics and `_` are word characters in every encoding.
    /// For UTF-8, a well-formed multi-byte character counts when it is
    /// alphanumeric. Malformed or truncated sequences never do.
    pub fn starts_with_word_char(self, bytes: &[u8]) -> bool {
        let Some(&first) = bytes.first() else {
            return false;
        };
        if first.is_ascii() {
            return first.is_ascii_alphanumeric() || first == b'_';
        }
        if self != Encoding::Utf8 {
            return false;
        }
        let width = utf8_char_width(first).min(bytes.len());
        std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .is_some_and(char::is_alphanumeric)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
///
/// - `0xC0..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF7`: 4 bytes
/// - Everything else (ASCII, continuation, invalid): 1 byte
#[inline]
fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// A span of source bytes that is not valid under its declared encoding.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[error("Invalid byte sequence in {encoding}")]
pub struct InvalidByteSequence {
    /// The encoding the bytes were checked against.
    pub encoding: Encoding,
    /// Byte offset of the first invalid byte.
    pub offset: usize,
}
