//! clex-util - Foundation types shared by the clex crates.
//!
//! This crate carries the pieces every other clex crate needs but that do
//! not belong to any single phase:
//!
//! - [`span`] - byte-offset spans with line/column information, and
//!   [`SourceFile`] for mapping spans back to source lines
//! - [`diagnostic`] - diagnostic levels, codes, builders and the
//!   collecting [`Handler`]
//! - [`error`] - error types for the operations above
//!
//! # Example
//!
//! ```
//! use clex_util::{DiagnosticBuilder, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("stray character")
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! assert!(!handler.has_errors());
//! ```

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceError, SourceResult};
pub use span::{SourceFile, Span};
