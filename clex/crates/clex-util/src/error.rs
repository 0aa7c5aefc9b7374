//! Error types for clex-util operations.

use thiserror::Error;

/// Error raised when a span cannot be mapped back onto a [`SourceFile`].
///
/// [`SourceFile`]: crate::span::SourceFile
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Start offset lies after the end offset
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span reaches past the end of the file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        file_len: usize,
        span_start: usize,
        span_end: usize,
    },

    /// Span boundary falls inside a multi-byte character
    #[error("Span {start}..{end} is not on character boundaries")]
    NotCharBoundary { start: usize, end: usize },

    /// Line number outside the file
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },
}

/// Result type alias for source file operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
