//! Tokenizer for Liquid templates.
//!
//! Splits template source into an ordered sequence of opaque spans. A span
//! starting with `{{` is a variable, one starting with `{%` is a tag, and
//! anything else is literal text. The kind is never stored; consumers read
//! it off the first two bytes (see [`TokenKind::of`]).
//!
//! Scanning happens eagerly in [`Tokenizer::new`]. The parser then pops
//! tokens with [`Tokenizer::shift`], optionally tracking line numbers.
//!
//! Malformed input never fails here. Unterminated `{{`, `{%`, and raw
//! blocks degrade to short fallback tokens and the parser reports them.
//! The only error is [`LexError::InvalidByteSequence`], raised when a text
//! scan runs over a source that is not valid in its declared encoding.
//!
//! Scanning emits `tracing` spans and events but never installs a
//! subscriber; the host application owns that.

mod lex_error;
mod options;
mod token;
mod tokenizer;

pub use lex_error::LexError;
pub use liquid_lexer_core::{Encoding, Source};
pub use options::TokenizerOptions;
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

