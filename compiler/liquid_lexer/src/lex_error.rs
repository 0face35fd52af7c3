//! Tokenizer errors.

use liquid_lexer_core::{Encoding, InvalidByteSequence};
use thiserror::Error;

/// An error raised while tokenizing.
///
/// Unterminated markers are not errors; they produce fallback tokens.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexError {
    /// Literal text contains bytes that are invalid in the declared encoding.
    #[error("Invalid byte sequence in {encoding}")]
    InvalidByteSequence {
        encoding: Encoding,
        /// Absolute byte offset of the first invalid byte.
        offset: usize,
    },
}

impl LexError {
    /// The encoding named by the error.
    pub fn encoding(&self) -> Encoding {
        match *self {
            LexError::InvalidByteSequence { encoding, .. } => encoding,
        }
    }

    /// Absolute byte offset the error points at.
    pub fn offset(&self) -> usize {
        match *self {
            LexError::InvalidByteSequence { offset, .. } => offset,
        }
    }
}

impl From<InvalidByteSequence> for LexError {
    fn from(err: InvalidByteSequence) -> Self {
        LexError::InvalidByteSequence {
            encoding: err.encoding,
            offset: err.offset,
        }
    }
}
