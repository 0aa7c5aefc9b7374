//! Span module - Source location tracking.
//!
//! A [`Span`] records where a piece of source text lives: its byte range and
//! the human-readable line/column of its first character. [`SourceFile`]
//! maps spans back to the text of the line they start on.
//!
//! # Examples
//!
//! ```
//! use clex_util::span::Span;
//!
//! // `return` starting at byte 10, on line 2, column 5
//! let span = Span::new(10, 16, 2, 5);
//! assert_eq!(span.len(), 6);
//! ```

mod source_file;

pub use source_file::SourceFile;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (`start` inclusive, `end` exclusive)
/// - Line and column of `start` (both 1-based, column counted in characters)
///
/// # Examples
///
/// ```
/// use clex_util::span::Span;
///
/// let span = Span::new(0, 5, 1, 1);
/// assert_eq!(span.len(), 5);
///
/// let point = Span::point(7, 3, 2);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a span covering `start..end` that begins at `line:column`.
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single offset.
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 1, 5);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 5);
    }

    #[test]
    fn test_span_point() {
        let span = Span::point(3, 1, 4);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert_eq!((span.line, span.column), (1, 4));
    }

    #[test]
    fn test_dummy_span() {
        assert_eq!(Span::DUMMY.start, 0);
        assert_eq!(Span::DUMMY.end, 0);
        assert_eq!(Span::default(), Span::DUMMY);
    }
}
