//! Borrowed template source with its declared encoding.
//!
//! A [`Source`] never owns or copies the template text. Tokens produced
//! from it are slices of the caller's buffer, so the buffer outlives the
//! scan while the scanner itself can be dropped as soon as scanning ends.

use crate::Encoding;

/// Immutable template bytes plus the encoding they are declared in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Source<'src> {
    bytes: &'src [u8],
    encoding: Encoding,
}

impl<'src> Source<'src> {
    /// Wrap raw bytes declared in `encoding`.
    ///
    /// The bytes are not validated here. Validation happens lazily, on the
    /// spans a scan actually asks about.
    pub const fn new(bytes: &'src [u8], encoding: Encoding) -> Self {
        Self { bytes, encoding }
    }

    /// Wrap UTF-8 text. Always well-formed.
    pub const fn utf8(text: &'src str) -> Self {
        Self::new(text.as_bytes(), Encoding::Utf8)
    }

    /// Wrap bytes with no declared text encoding.
    pub const fn binary(bytes: &'src [u8]) -> Self {
        Self::new(bytes, Encoding::Binary)
    }

    /// The source bytes.
    pub const fn as_bytes(&self) -> &'src [u8] {
        self.bytes
    }

    /// The declared encoding.
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Length of the source in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the source is empty.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl<'src> From<&'src str> for Source<'src> {
    fn from(text: &'src str) -> Self {
        Self::utf8(text)
    }
}
