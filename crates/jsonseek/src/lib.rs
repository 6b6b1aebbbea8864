//! Zero-copy JSON element trees with path selectors.
//!
//! `jsonseek` parses a byte buffer holding one JSON value into an immutable
//! [`Document`]: an arena of typed elements that keep byte ranges into the
//! buffer instead of copies of its content. Elements are navigated with
//! short path selectors such as `.items[0].name`.
//!
//! ```rust
//! use jsonseek::{Kind, parse};
//!
//! let doc = parse(br#"{"name":"widget","tags":["a","b"],"price":9.5}"#).unwrap();
//! let root = doc.root();
//!
//! assert_eq!(root.kind(), Kind::Object);
//! assert_eq!(root.find(".name").unwrap().as_str(), "widget");
//! assert_eq!(root.find(".tags[1]").unwrap().as_str(), "b");
//! assert_eq!(root.find(".price").unwrap().as_f64(), Ok(9.5));
//!
//! // Lenient batch lookup: failures become empty strings.
//! assert_eq!(root.select([".name", ".missing"]), ["widget", ""]);
//! ```
//!
//! Content is served straight from the source buffer. String elements yield
//! the text between their quotes exactly as written; escape sequences are not
//! decoded.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod parser;
mod selector;
mod span;
mod tree;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use parser::{
    DEFAULT_MAX_DEPTH, ParseError, ParserOptions, SyntaxError, TreeBuilder, parse,
    parse_with_options,
};
pub use selector::{
    FindError, Found, Segment, Selector, SelectorSyntaxError, find, get, select,
};
pub use span::Span;
pub use tree::{Document, Element, Kind, NodeId, TypeError};
