//! Source location tracking for atoms.

/// A byte range in the original SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Extends the span so that it ends at `end`.
    #[must_use]
    pub const fn extend_to(self, end: usize) -> Self {
        Self {
            start: self.start,
            end,
        }
    }
}
