use std::ops::Range;

use serde::Serialize;

/// A byte range `[start, end)` into the scanned text.
///
/// References store spans rather than copied text, so slicing the input with
/// a reference's span always reproduces exactly what the author wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }

    /// Slices `text` with this span, or `None` if the span does not fit.
    pub fn slice(self, text: &str) -> Option<&str> {
        text.get(self.range())
    }
}
