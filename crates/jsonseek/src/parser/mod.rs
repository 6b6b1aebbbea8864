//! Parsing: bytes to [`Document`].
//!
//! Two stages run interleaved in a single pass. The tokenizer finds the
//! next token from a byte offset, and the [`TreeBuilder`] turns each token
//! into a structural step on its bracket stack, creating nodes as values
//! appear.
//!
//! The accepted grammar is JSON's structure: `{ } [ ] : ,`, quoted strings,
//! and bare runs between them, with ASCII whitespace ignored between tokens.
//! Numbers are not validated here; a bare run that is not `null`, `true`, or
//! `false` becomes a number element and is checked only when read through
//! [`Element::as_i64`](crate::Element::as_i64) or
//! [`Element::as_f64`](crate::Element::as_f64).
//!
//! Decisions on inputs the grammar leaves open:
//!
//! - A quote preceded by an odd run of backslashes is escaped; an even run
//!   (e.g. `"a\\"`) leaves the quote closing the string.
//! - Bytes after the root value are an error unless
//!   [`ParserOptions::allow_trailing_data`] is set.
//! - A repeated object key replaces the earlier value but keeps the earlier
//!   key's position among its siblings.

mod builder;
mod error;
mod options;
pub(crate) mod tokenizer;


pub use builder::TreeBuilder;
pub use error::{ParseError, SyntaxError};
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};

use crate::Document;

/// Parses `source` with the default [`ParserOptions`].
///
/// # Errors
///
/// Returns a [`ParseError`] if `source` is not a single JSON value.
///
/// # Examples
///
/// ```rust
/// let doc = jsonseek::parse(br#"{"a":1,"b":[2,3]}"#).unwrap();
/// assert_eq!(doc.find(".a").unwrap().as_i64(), Ok(1));
///
/// assert!(jsonseek::parse(br#"{"a":1,"#).is_err());
/// ```
pub fn parse(source: &[u8]) -> Result<Document<'_>, ParseError> {
    Document::parse(source)
}

/// Parses `source` with the given options.
///
/// # Errors
///
/// Returns a [`ParseError`] if `source` is not accepted under `options`.
pub fn parse_with_options(
    source: &[u8],
    options: ParserOptions,
) -> Result<Document<'_>, ParseError> {
    Document::parse_with_options(source, options)
}
