/// Default bound on container nesting, see [`ParserOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the tree builder.
///
/// The defaults describe a strict single-document parse: one JSON value,
/// optionally surrounded by ASCII whitespace, and nothing else. Nesting is
/// bounded by [`DEFAULT_MAX_DEPTH`], so the defaults reject valid JSON nested
/// deeper than that; set [`max_depth`](Self::max_depth) to `None` to lift it.
///
/// # Examples
///
/// ```rust
/// use jsonseek::{ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     allow_unterminated_scalar: true,
///     ..Default::default()
/// };
/// let doc = parse_with_options(b"42", options).unwrap();
/// assert_eq!(doc.root().as_i64(), Ok(42));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Whether bytes after a complete root value are ignored.
    ///
    /// When `false`, any token following the root value is a
    /// [`SyntaxError::TrailingData`](crate::SyntaxError::TrailingData). When
    /// `true`, parsing stops as soon as the root value is complete and the
    /// rest of the buffer is never tokenized.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_trailing_data: bool,

    /// Whether a bare token (number, `true`, `false`, `null`) may be ended by
    /// the end of the buffer.
    ///
    /// Bare tokens are normally terminated by a separator or whitespace, so a
    /// buffer holding only `42` is rejected as an unterminated scalar. Enable
    /// this to accept a bare root scalar that runs to the end of input.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unterminated_scalar: bool,

    /// Maximum container nesting depth, or `None` for no limit.
    ///
    /// Opening a container at this depth is a
    /// [`SyntaxError::DepthLimitExceeded`](crate::SyntaxError::DepthLimitExceeded)
    /// even when the document is otherwise valid JSON. Parsing and lookups
    /// do not recurse, so `None` is safe; the bound only caps memory spent on
    /// adversarial input.
    ///
    /// # Default
    ///
    /// `Some(DEFAULT_MAX_DEPTH)`
    pub max_depth: Option<usize>,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on syntax errors instead of returning them.
    ///
    /// Enabled only in test builds to produce backtraces on parse failures.
    pub panic_on_error: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            allow_trailing_data: false,
            allow_unterminated_scalar: false,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: false,
        }
    }
}
