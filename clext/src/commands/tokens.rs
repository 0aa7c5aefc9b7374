//! Tokens command implementation.
//!
//! Prints the token stream of each input file.

use std::io::Write;
use std::path::PathBuf;

use clex_lex::Token;
use serde::Serialize;

use crate::commands::common::{lex_file, read_source, write_header, OutputFormat};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Input files, processed in order.
    pub files: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Fail on the first lexical error instead of using fallback tokens.
    pub strict: bool,
}

/// Tokens of one file, as emitted in JSON output for several files.
#[derive(Debug, Serialize)]
struct FileTokens {
    file: String,
    tokens: Vec<Token>,
}

/// Run the tokens command.
///
/// Text output is one `KIND('value') at POSITION (Lline:Ccolumn)` line per
/// token. JSON output is the token array for a single file, or an array of
/// `{file, tokens}` objects for several.
pub fn run_tokens(args: &TokensArgs, out: &mut impl Write, err_out: &mut impl Write) -> Result<()> {
    let multiple = args.files.len() > 1;

    let mut files = Vec::with_capacity(args.files.len());
    for (index, path) in args.files.iter().enumerate() {
        let file = read_source(path)?;
        let tokens = lex_file(&file, args.strict, err_out)?;

        match args.format {
            OutputFormat::Text => {
                if multiple {
                    if index > 0 {
                        writeln!(out)?;
                    }
                    write_header(out, file.name())?;
                }
                for token in &tokens {
                    writeln!(out, "{}", token)?;
                }
            },
            OutputFormat::Json => files.push(FileTokens {
                file: file.name().to_string(),
                tokens,
            }),
        }
    }

    if args.format == OutputFormat::Json {
        if multiple {
            serde_json::to_writer_pretty(&mut *out, &files)?;
        } else if let Some(single) = files.first() {
            serde_json::to_writer_pretty(&mut *out, &single.tokens)?;
        }
        writeln!(out)?;
    }

    Ok(())
}
