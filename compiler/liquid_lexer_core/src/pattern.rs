//! Fixed search shapes understood by the [`Scanner`](crate::Scanner).
//!
//! Each variant is a straight-line byte search. Single-needle and
//! small-alternation searches go through `memchr`, substrings through
//! `memchr::memmem`.

use crate::Encoding;

/// A search shape for [`Scanner::skip_until`](crate::Scanner::skip_until).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern<'p> {
    /// A single byte.
    Byte(u8),
    /// A fixed substring, e.g. `%}`.
    Literal(&'p [u8]),
    /// Any one of a small set of stop bytes.
    AnyOf(&'p [u8]),
    /// `lead` immediately followed by any byte of `follow`, e.g. `{` then
    /// `{` or `%`. Always matches exactly two bytes.
    LeadThenAny { lead: u8, follow: &'p [u8] },
}

impl Pattern<'_> {
    /// Find the leftmost match in `haystack`.
    ///
    /// Returns `(offset, len)` of the match.
    pub fn find(&self, haystack: &[u8]) -> Option<(usize, usize)> {
        match *self {
            Pattern::Byte(byte) => memchr::memchr(byte, haystack).map(|at| (at, 1)),
            Pattern::Literal(needle) => {
                memchr::memmem::find(haystack, needle).map(|at| (at, needle.len()))
            }
            Pattern::AnyOf(set) => find_any(set, haystack).map(|at| (at, 1)),
            Pattern::LeadThenAny { lead, follow } => {
                let mut offset = 0;
                while let Some(found) = memchr::memchr(lead, &haystack[offset..]) {
                    let at = offset + found;
                    if haystack.get(at + 1).is_some_and(|b| follow.contains(b)) {
                        return Some((at, 2));
                    }
                    offset = at + 1;
                }
                None
            }
        }
    }
}

/// The leading shape of a tag body: an optional `-`, optional ASCII
/// whitespace, then the name ending at a word boundary (`- raw`, `endraw`).
///
/// Always matched anchored at the cursor, via
/// [`Scanner::match_leading`](crate::Scanner::match_leading).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagName<'p>(pub &'p [u8]);

impl TagName<'_> {
    /// Length of the anchored match `-?\s*name\b` at the start of
    /// `haystack`, if any.
    ///
    /// `encoding` decides what counts as a word character after the name.
    pub fn match_prefix(&self, haystack: &[u8], encoding: Encoding) -> Option<usize> {
        let name = self.0;
        let mut len = usize::from(haystack.first() == Some(&b'-'));
        len += haystack[len..]
            .iter()
            .take_while(|&&b| is_space(b))
            .count();
        if !haystack[len..].starts_with(name) {
            return None;
        }
        len += name.len();
        if encoding.starts_with_word_char(&haystack[len..]) {
            return None;
        }
        Some(len)
    }
}

/// ASCII whitespace as understood by `\s`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Offset of the first byte of `haystack` contained in `set`.
///
/// `memchr3` handles at most three needles, so larger sets are split and
/// the remainder is only searched up to the first primary hit.
fn find_any(set: &[u8], haystack: &[u8]) -> Option<usize> {
    match *set {
        [] => None,
        [a] => memchr::memchr(a, haystack),
        [a, b] => memchr::memchr2(a, b, haystack),
        [a, b, c] => memchr::memchr3(a, b, c, haystack),
        [a, b, c, ref rest @ ..] => {
            let primary = memchr::memchr3(a, b, c, haystack);
            let bound = primary.unwrap_or(haystack.len());
            earliest_of(primary, find_any(rest, &haystack[..bound]))
        }
    }
}

/// Returns the earliest (minimum) of two optional positions.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}
