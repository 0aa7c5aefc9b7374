//! clex-lex - Lexical Analyzer for the clex Language
//!
//! This crate turns the source text of a small C-like language into a stream
//! of typed tokens, each carrying its byte position, line and column.
//!
//! # Example Usage
//!
//! ```
//! use clex_lex::{tokenize, TokenKind};
//!
//! let kinds: Vec<_> = tokenize("int x = 42;").map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Int,
//!         TokenKind::Identifier,
//!         TokenKind::Assign,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions, keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classification
//! - [`error`] - Strict-mode lexical errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `class`, `if`, `while`, `return`, `void`, `int`, `string`, `bool`,
//! `public`, `private`, `static`
//!
//! ## Literals
//!
//! - **Identifier**: a letter or `_`, then letters, digits or `_`
//! - **Number**: decimal digits only, no sign, fraction or exponent
//! - **String**: `"..."`, no escape sequences
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`
//! - **Assignment**: `=`
//!
//! ## Delimiters
//!
//! `{`, `}`, `(`, `)`, `;`, `,`, `.`
//!
//! # Lenient and strict scanning
//!
//! By default the lexer never fails: a character that starts no token
//! becomes a one-character identifier and an unterminated string runs to
//! the end of input. [`tokenize_strict`] and [`Lexer::try_next_token`]
//! report these cases as [`LexError`] instead.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind, KEYWORDS};

/// Returns a lenient token stream over `source`.
///
/// The stream ends with exactly one [`TokenKind::Eof`] token.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Tokenizes all of `source`, stopping at the first lexical error.
///
/// On success the last token is [`TokenKind::Eof`].
///
/// # Example
///
/// ```
/// use clex_lex::{tokenize_strict, LexError};
///
/// assert_eq!(tokenize_strict("x;").unwrap().len(), 3);
/// assert!(matches!(
///     tokenize_strict("\"abc"),
///     Err(LexError::UnterminatedString { .. })
/// ));
/// ```
pub fn tokenize_strict(source: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.try_next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
