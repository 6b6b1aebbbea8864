use thiserror::Error;

/// A syntax error raised while building a tree, with the byte offset at which
/// it was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    pub(crate) kind: SyntaxError,
    pub(crate) offset: usize,
}

impl ParseError {
    pub(crate) const fn new(kind: SyntaxError, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.kind
    }

    /// Byte offset into the source buffer where the error was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// The ways a buffer can fail to parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntaxError {
    /// A string token has no closing quote.
    #[error("unterminated string")]
    UnterminatedString,
    /// A bare token ran into the end of the buffer.
    #[error("unterminated scalar")]
    UnterminatedScalar,
    /// A closing bracket with no open container.
    #[error("unexpected closing '{0}'")]
    UnbalancedBracket(char),
    /// A closing bracket that does not match the innermost open container.
    #[error("expected '{expected}' but found '{found}'")]
    MismatchedBracket {
        /// Closing bracket of the open container.
        expected: char,
        /// Closing bracket actually read.
        found: char,
    },
    /// A `,` or `:` outside the position where it is allowed.
    #[error("unexpected '{0}'")]
    UnexpectedSeparator(char),
    /// Two values in a container without a `,` between them.
    #[error("missing ',' between values")]
    MissingComma,
    /// A `,` directly followed by a closing bracket.
    #[error("trailing ',' before '{0}'")]
    TrailingComma(char),
    /// A value inside an object without a preceding key.
    #[error("missing object key")]
    MissingKey,
    /// An object key followed by something other than `:`.
    #[error("expected ':' after object key")]
    MissingColon,
    /// An object closed while a key was still waiting for its value.
    #[error("object key without a value")]
    DanglingKey,
    /// A token after the root value was complete.
    #[error("trailing data after the root value")]
    TrailingData,
    /// The buffer ended with open containers.
    #[error("unterminated container")]
    UnterminatedContainer,
    /// The buffer holds no value at all.
    #[error("empty input")]
    EmptyInput,
    /// Containers nested deeper than [`ParserOptions::max_depth`](crate::ParserOptions::max_depth).
    #[error("nesting depth exceeds {0}")]
    DepthLimitExceeded(usize),
}
