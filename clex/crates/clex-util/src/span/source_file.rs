//! Source files and span-to-line mapping.

use std::sync::Arc;

use super::Span;
use crate::diagnostic::SourceSnippet;
use crate::error::{SourceError, SourceResult};

/// A named source text with precomputed line starts.
///
/// # Examples
///
/// ```
/// use clex_util::span::SourceFile;
///
/// let file = SourceFile::new("main.cs", "int x;\nx = 1;");
/// assert_eq!(file.name(), "main.cs");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_at(2), Some("x = 1;"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Byte offset of the first character of every line
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file.
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(
                content
                    .char_indices()
                    .filter(|&(_, ch)| ch == '\n')
                    .map(|(i, _)| i + 1),
            )
            .collect()
    }

    /// File name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File content.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Total number of lines (a trailing newline opens an empty last line).
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where a 0-indexed line starts.
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Text of a 1-indexed line, without its line terminator.
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract `start..end` with bounds and boundary checking.
    pub fn extract_range(&self, start: usize, end: usize) -> SourceResult<&str> {
        if start > end {
            return Err(SourceError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        self.content
            .get(start..end)
            .ok_or(SourceError::NotCharBoundary { start, end })
    }

    /// Build a snippet that underlines the first line of `span`.
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("a.cs", "x = @;");
    /// let snippet = file.snippet(Span::new(4, 5, 1, 5), Some("here")).unwrap();
    /// assert_eq!(snippet.start_column, 5);
    /// assert_eq!(snippet.end_column, 6);
    /// ```
    pub fn snippet(&self, span: Span, label: Option<&str>) -> SourceResult<SourceSnippet> {
        let line_number = span.line as usize;
        let line = self
            .line_at(line_number)
            .ok_or(SourceError::InvalidLineNumber {
                line: line_number,
                max_lines: self.line_count(),
            })?;
        let text = self.extract_range(span.start, span.end)?;
        let first_line = text.split('\n').next().unwrap_or_default();
        let width = first_line.trim_end_matches('\r').chars().count();
        let start_column = span.column as usize;
        Ok(SourceSnippet::new(
            line,
            line_number,
            start_column,
            start_column + width,
            label,
        ))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
