//! Stats command implementation.
//!
//! Counts tokens per kind, in the order kinds are first seen.

use std::io::Write;
use std::path::PathBuf;

use clex_lex::Token;
use indexmap::IndexMap;
use serde::Serialize;

use crate::commands::common::{lex_file, read_source, write_header, OutputFormat};
use crate::error::Result;

/// Arguments for the stats command.
#[derive(Debug, Clone)]
pub struct StatsArgs {
    /// Input files, processed in order.
    pub files: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Fail on the first lexical error instead of using fallback tokens.
    pub strict: bool,
}

/// Token counts for one file. The EOF token is not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenStats {
    /// Name of the file the counts belong to.
    pub file: String,
    /// Total number of tokens.
    pub total: usize,
    /// Count per kind name, in first-seen order.
    pub counts: IndexMap<&'static str, usize>,
}

impl TokenStats {
    /// Count `tokens` by kind.
    pub fn from_tokens(file: impl Into<String>, tokens: &[Token]) -> Self {
        let mut counts = IndexMap::new();
        let mut total = 0;
        for token in tokens.iter().filter(|token| !token.is_eof()) {
            *counts.entry(token.kind().name()).or_insert(0) += 1;
            total += 1;
        }
        Self {
            file: file.into(),
            total,
            counts,
        }
    }

    /// Add another file's counts to these.
    pub fn merge(&mut self, other: &TokenStats) {
        for (&kind, &count) in &other.counts {
            *self.counts.entry(kind).or_insert(0) += count;
        }
        self.total += other.total;
    }

    fn write_text(&self, out: &mut impl Write) -> Result<()> {
        for (kind, count) in &self.counts {
            writeln!(out, "{:<16} {:>8}", kind, count)?;
        }
        writeln!(out, "{:<16} {:>8}", "total", self.total)?;
        Ok(())
    }
}

/// Run the stats command.
///
/// With several files, a combined `all files` section follows the
/// per-file sections in text output.
pub fn run_stats(args: &StatsArgs, out: &mut impl Write, err_out: &mut impl Write) -> Result<()> {
    let mut per_file = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let file = read_source(path)?;
        let tokens = lex_file(&file, args.strict, err_out)?;
        per_file.push(TokenStats::from_tokens(file.name(), &tokens));
    }

    match args.format {
        OutputFormat::Text => {
            if let [single] = per_file.as_slice() {
                return single.write_text(out);
            }

            let mut combined = TokenStats::from_tokens("all files", &[]);
            for stats in &per_file {
                write_header(out, &stats.file)?;
                stats.write_text(out)?;
                writeln!(out)?;
                combined.merge(stats);
            }
            write_header(out, &combined.file)?;
            combined.write_text(out)?;
        },
        OutputFormat::Json => {
            if let [single] = per_file.as_slice() {
                serde_json::to_writer_pretty(&mut *out, single)?;
            } else {
                serde_json::to_writer_pretty(&mut *out, &per_file)?;
            }
            writeln!(out)?;
        },
    }

    Ok(())
}
