use core::ops::Range;

/// A half-open byte range `offset..limit` into a document's source buffer.
///
/// Scalars cover their literal token (quotes excluded for strings);
/// containers cover everything from the opening bracket to the matching
/// closing bracket inclusive.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// First byte of the range.
    pub offset: usize,
    /// One past the last byte of the range.
    pub limit: usize,
}

impl Span {
    /// Creates a span; `offset` must not exceed `limit`.
    #[must_use]
    pub const fn new(offset: usize, limit: usize) -> Self {
        debug_assert!(offset <= limit);
        Self { offset, limit }
    }

    /// An empty span anchored at `offset`.
    #[must_use]
    pub const fn empty(offset: usize) -> Self {
        Self {
            offset,
            limit: offset,
        }
    }

    /// Number of bytes covered.
    #[must_use]
    pub const fn len(self) -> usize {
        self.limit - self.offset
    }

    /// Returns `true` if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.offset == self.limit
    }

    /// The span as a slice index.
    #[must_use]
    pub const fn range(self) -> Range<usize> {
        self.offset..self.limit
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}
