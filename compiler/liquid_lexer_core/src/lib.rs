//! Low-level byte scanner for Liquid template source.
//!
//! This crate is standalone: it knows nothing about tags, variables, or
//! raw blocks. It provides a cursor ([`Scanner`]) over a borrowed byte
//! buffer ([`Source`]) and the small, fixed set of search shapes
//! ([`Pattern`], [`TagName`]) the tokenizer needs to find scan boundaries.
//!
//! No general regular-expression engine is involved. Every search is a
//! straight-line byte comparison, accelerated with `memchr` where a
//! single needle (or up to three) can be searched for at once.
//!
//! # Encoding
//!
//! A [`Source`] carries the [`Encoding`] its bytes are declared in. The
//! scanner never decodes text on its own; callers ask for validation of
//! a specific span via [`Scanner::validate`].

mod encoding;
mod pattern;
mod scanner;
mod source;

pub use encoding::{Encoding, InvalidByteSequence};
pub use pattern::{Pattern, TagName};
pub use scanner::Scanner;
pub use source::Source;
