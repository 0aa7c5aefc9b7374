//! Common utilities shared across commands.

use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use clex_lex::{tokenize_strict, LexError, Lexer, Token};
use clex_util::{Handler, SourceFile};
use serde::{Deserialize, Serialize};

use crate::error::{ClextError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per item
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

// ============================================================================
// Input Files
// ============================================================================

/// Read an input file into a [`SourceFile`] named after its path.
///
/// Missing paths, directories and non-UTF-8 content are reported as
/// [`ClextError::FileOperation`].
pub fn read_source(path: &Path) -> Result<SourceFile> {
    if !path.exists() {
        return Err(ClextError::FileOperation(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(ClextError::FileOperation(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ClextError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "read input");
    Ok(SourceFile::new(path.display().to_string(), content))
}

/// Write the `==> name <==` header that separates per-file output.
pub fn write_header(out: &mut impl Write, name: &str) -> Result<()> {
    writeln!(out, "==> {} <==", name)?;
    Ok(())
}

// ============================================================================
// Lexing
// ============================================================================

/// Tokenize a whole file.
///
/// In strict mode the first lexical error is rendered to `err_out` and
/// turned into [`ClextError::Lex`]. In lenient mode fallback tokens are kept
/// and each one is logged as a warning.
pub fn lex_file(file: &SourceFile, strict: bool, err_out: &mut impl Write) -> Result<Vec<Token>> {
    if strict {
        return match tokenize_strict(file.content()) {
            Ok(tokens) => Ok(tokens),
            Err(err) => {
                writeln!(err_out, "{}", render_lex_error(file, &err))?;
                Err(ClextError::Lex(format!("could not tokenize {}", file.name())))
            },
        };
    }

    let handler = Handler::new();
    let tokens: Vec<Token> = Lexer::new(file.content()).with_handler(&handler).collect();
    let warnings = handler.warning_count();
    for diagnostic in handler.take() {
        tracing::warn!("{}", diagnostic.render(file));
    }

    tracing::debug!(
        file = file.name(),
        tokens = tokens.len(),
        warnings,
        "tokenized"
    );
    Ok(tokens)
}

/// Render a lexical error with a labelled snippet of the offending line.
pub fn render_lex_error(file: &SourceFile, err: &LexError) -> String {
    let mut diagnostic = err.to_diagnostic();
    if let Ok(snippet) = file.snippet(err.span(), Some(err.label())) {
        diagnostic = diagnostic.with_snippet(snippet);
    }
    diagnostic.render(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_names() {
        assert_eq!(
            OutputFormat::from_str("json", true).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_read_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("main.cs");
        std::fs::write(&path, "int x;\n").unwrap();

        let file = read_source(&path).unwrap();
        assert_eq!(file.content(), "int x;\n");
        assert_eq!(file.name(), path.display().to_string());
    }

    #[test]
    fn test_read_source_missing() {
        let err = read_source(Path::new("/nonexistent/main.cs")).unwrap_err();
        assert!(matches!(err, ClextError::FileOperation(_)));
    }

    #[test]
    fn test_read_source_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_source(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("not a file"));
    }

    #[test]
    fn test_read_source_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.cs");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(read_source(&path), Err(ClextError::FileOperation(_))));
    }

    #[test]
    fn test_lex_file_lenient_keeps_fallback() {
        let file = SourceFile::new("a.cs", "a # b");
        let mut err_out: Vec<u8> = Vec::new();
        let tokens = lex_file(&file, false, &mut err_out).unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].value(), "#");
        assert!(err_out.is_empty());
    }

    #[test]
    fn test_lex_file_strict_renders_error() {
        let file = SourceFile::new("a.cs", "x = #;");
        let mut err_out: Vec<u8> = Vec::new();
        let err = lex_file(&file, true, &mut err_out).unwrap_err();
        assert!(matches!(err, ClextError::Lex(_)));

        let rendered = String::from_utf8(err_out).unwrap();
        assert!(rendered.starts_with("error[E0101]: unexpected character '#'\n --> a.cs:1:5\n"));
    }

    #[test]
    fn test_render_unterminated_string() {
        let file = SourceFile::new("main.cs", "int a;\nstring s = \"abc");
        let err = tokenize_strict(file.content()).unwrap_err();

        let rendered = render_lex_error(&file, &err);
        let expected = [
            "error[E0102]: unterminated string literal",
            " --> main.cs:2:12",
            "  2 | string s = \"abc",
            "    |            ^^^^ string starts here",
            "  = note: escape sequences are not supported",
            "  = help: add a closing '\"'",
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }
}
