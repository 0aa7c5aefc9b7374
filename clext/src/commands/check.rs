//! Check command implementation.
//!
//! Scans each file in strict mode and reports every lexical error, not
//! just the first.

use std::io::Write;
use std::path::PathBuf;

use clex_lex::{LexError, Lexer};
use clex_util::SourceFile;

use crate::commands::common::{read_source, render_lex_error};
use crate::error::{ClextError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Input files, processed in order.
    pub files: Vec<PathBuf>,
}

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Tokens produced, EOF included.
    pub tokens: usize,
    /// Errors in source order.
    pub errors: Vec<LexError>,
}

/// Scan `file` to the end, collecting every strict-mode error.
///
/// The lexer consumes the offending input on error, so scanning resumes
/// right after it.
pub fn check_file(file: &SourceFile) -> CheckReport {
    let mut lexer = Lexer::new(file.content());
    let mut tokens = 0;
    let mut errors = Vec::new();

    loop {
        match lexer.try_next_token() {
            Ok(token) => {
                tokens += 1;
                if token.is_eof() {
                    break;
                }
            },
            Err(err) => errors.push(err),
        }
    }

    CheckReport { tokens, errors }
}

/// Run the check command.
///
/// Clean files get an `ok` line on `out`; errors are rendered to
/// `err_out`. Fails if any file has an error.
pub fn run_check(args: &CheckArgs, out: &mut impl Write, err_out: &mut impl Write) -> Result<()> {
    let mut failed = 0;

    for path in &args.files {
        let file = read_source(path)?;
        let report = check_file(&file);

        if report.errors.is_empty() {
            writeln!(out, "{}: ok ({} tokens)", file.name(), report.tokens)?;
            continue;
        }

        failed += 1;
        for err in &report.errors {
            writeln!(err_out, "{}\n", render_lex_error(&file, err))?;
        }
        tracing::info!(file = file.name(), errors = report.errors.len(), "lexical errors found");
    }

    if failed > 0 {
        return Err(ClextError::Lex(format!(
            "{} of {} files had lexical errors",
            failed,
            args.files.len()
        )));
    }

    Ok(())
}
