use alloc::string::String;

use thiserror::Error;

use crate::Kind;

/// Why a path did not resolve.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FindError {
    /// A segment names a key or index the container does not have.
    #[error("no element under key {key:?}")]
    Lookup {
        /// The missing key, as written in the path.
        key: String,
    },
    /// The path continues below a scalar.
    #[error("cannot descend into a scalar value of type {kind} (remaining path {remainder:?})")]
    Structural {
        /// Kind of the scalar reached.
        kind: Kind,
        /// The unresolved rest of the path.
        remainder: String,
    },
    /// The path is malformed.
    #[error(transparent)]
    Syntax(#[from] SelectorSyntaxError),
}

/// A malformed path expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectorSyntaxError {
    /// A segment starts with something other than `.` or `[`.
    #[error("unexpected {found:?} at offset {offset}, expected '.' or '['")]
    UnexpectedChar {
        /// The offending character.
        found: char,
        /// Byte offset into the path.
        offset: usize,
    },
    /// A `[` without a matching `]`.
    #[error("unterminated index starting at offset {offset}")]
    UnterminatedIndex {
        /// Byte offset of the `[`.
        offset: usize,
    },
}
