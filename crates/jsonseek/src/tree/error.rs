use alloc::string::String;

use thiserror::Error;

use crate::Kind;

/// An accessor was called on an element that cannot support it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TypeError {
    /// The element's kind does not support the accessor.
    #[error("expected {expected}, found {found}")]
    Mismatch {
        /// What the accessor accepts.
        expected: &'static str,
        /// The element's actual kind.
        found: Kind,
    },
    /// A number element whose text is not a valid JSON number.
    #[error("invalid number literal {0:?}")]
    InvalidNumber(String),
    /// A fractional or exponent number read as an integer.
    #[error("{0} is not an integer")]
    NotAnInteger(String),
    /// A number that does not fit the requested type.
    #[error("{0} is out of range")]
    OutOfRange(String),
}

impl TypeError {
    pub(crate) fn mismatch(expected: &'static str, found: Kind) -> Self {
        Self::Mismatch { expected, found }
    }
}
