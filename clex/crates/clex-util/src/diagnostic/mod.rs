//! Diagnostic reporting infrastructure
//!
//! Diagnostics are built with [`DiagnosticBuilder`] and collected by a
//! [`Handler`]. A [`Diagnostic`] renders itself against a [`SourceFile`]
//! for terminal output.
//!
//! ```
//! use clex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use clex_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::{SourceFile, Span};
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// ```
/// use clex_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that makes the input unacceptable
    Error,
    /// A warning that doesn't change the result
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Render the diagnostic against the file it was reported in.
    ///
    /// Without explicit snippets, the first line of the span is shown.
    ///
    /// ```
    /// use clex_util::diagnostic::Diagnostic;
    /// use clex_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("a.cs", "x = #;");
    /// let diag = Diagnostic::error("unexpected character '#'", Span::new(4, 5, 1, 5));
    /// let text = diag.render(&file);
    /// assert!(text.starts_with("error: unexpected character '#'\n --> a.cs:1:5\n"));
    /// assert!(text.ends_with("    |     ^"));
    /// ```
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = format!(
            "{}\n --> {}:{}:{}",
            self,
            file.name(),
            self.span.line,
            self.span.column
        );

        let fallback;
        let snippets: &[SourceSnippet] = if self.snippets.is_empty() {
            fallback = file.snippet(self.span, None).ok();
            fallback.as_slice()
        } else {
            &self.snippets
        };
        for snippet in snippets {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str(&format!("\n  = note: {}", note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n  = help: {}", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Handler for collecting diagnostics
///
/// The `Handler` collects diagnostics through a shared reference, so a
/// lexer can hold `&Handler` while the caller inspects it afterwards.
///
/// ```
/// use clex_util::diagnostic::{Diagnostic, Handler};
/// use clex_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::warning("stray '&'", Span::DUMMY));
///
/// assert_eq!(handler.warning_count(), 1);
/// assert!(!handler.has_errors());
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Take all diagnostics, leaving the handler empty
    pub fn take(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::error("unterminated string literal", Span::DUMMY)
            .with_code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING);
        assert_eq!(
            diag.to_string(),
            "error[E0102]: unterminated string literal"
        );
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::warning("odd", Span::DUMMY);
        assert_eq!(diag.to_string(), "warning: odd");
    }

    #[test]
    fn test_render_with_notes_and_help() {
        let file = SourceFile::new("m.cs", "a | b");
        let diag = Diagnostic::error("unexpected character '|'", Span::new(2, 3, 1, 3))
            .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .with_note("'|' is only valid as part of '||'")
            .with_help("did you mean '||'?");
        let text = diag.render(&file);
        assert_eq!(
            text,
            "error[E0101]: unexpected character '|'\n --> m.cs:1:3\n  1 | a | b\n    |   ^\n  = note: '|' is only valid as part of '||'\n  = help: did you mean '||'?"
        );
    }

    #[test]
    fn test_render_uses_explicit_snippets() {
        let file = SourceFile::new("m.cs", "x");
        let diag = Diagnostic::warning("w", Span::new(0, 1, 1, 1))
            .with_snippet(SourceSnippet::point("other", 7, 2));
        assert!(diag.render(&file).contains("  7 | other"));
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("e", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::warning("w1", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::warning("w2", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.warning_count(), 2);
        assert_eq!(handler.diagnostics().len(), 3);
    }

    #[test]
    fn test_handler_take_empties() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::warning("w", Span::DUMMY));
        assert_eq!(handler.take().len(), 1);
        assert!(handler.diagnostics().is_empty());
        assert_eq!(handler.warning_count(), 0);
    }
}
