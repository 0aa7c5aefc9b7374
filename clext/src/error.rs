//! Error handling module for the clext CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the clext CLI application.
#[derive(Error, Debug)]
pub enum ClextError {
    /// Error when a configuration file cannot be found, read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be used.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when one or more inputs contain lexical errors.
    #[error("Lexing failed: {0}")]
    Lex(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ClextError.
pub type Result<T> = std::result::Result<T, ClextError>;
