use thiserror::Error;

use crate::{FindError, ParseError};

/// Any failure of the one-shot [`get`](crate::get) call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The buffer did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The path did not resolve.
    #[error(transparent)]
    Find(#[from] FindError),
}
