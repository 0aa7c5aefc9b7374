//! Errors reported by the lexer in strict mode.

use clex_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

/// A lexical error.
///
/// Only strict scanning produces these; the lenient lexer degrades to
/// fallback tokens instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unexpected character {ch:?}")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Where it occurs.
        span: Span,
    },

    /// A string literal that reaches end of input without a closing quote.
    #[error("unterminated string literal")]
    UnterminatedString {
        /// From the opening quote to end of input.
        span: Span,
    },
}

/// Result type for strict lexing.
pub type LexResult<T> = Result<T, LexError>;

impl LexError {
    /// Returns the source span of the error.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. } | LexError::UnterminatedString { span } => {
                *span
            },
        }
    }

    /// Returns the diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
        }
    }

    /// Returns the short label shown under the offending source.
    pub fn label(&self) -> &'static str {
        match self {
            LexError::UnexpectedCharacter { .. } => "not a valid token",
            LexError::UnterminatedString { .. } => "string starts here",
        }
    }

    /// Converts the error into an error-level diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::tokenize_strict;
    ///
    /// let err = tokenize_strict("a & b").unwrap_err();
    /// let diag = err.to_diagnostic();
    /// assert_eq!(diag.to_string(), "error[E0101]: unexpected character '&'");
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.to_string(), self.span()).with_code(self.code());
        match self {
            LexError::UnexpectedCharacter { ch: '&', .. } => {
                diagnostic.with_help("did you mean '&&'?")
            },
            LexError::UnexpectedCharacter { ch: '|', .. } => {
                diagnostic.with_help("did you mean '||'?")
            },
            LexError::UnexpectedCharacter { .. } => diagnostic,
            LexError::UnterminatedString { .. } => {
                diagnostic
                    .with_help("add a closing '\"'")
                    .with_note("escape sequences are not supported")
            },
        }
    }
}

impl From<LexError> for Diagnostic {
    fn from(err: LexError) -> Self {
        err.to_diagnostic()
    }
}
