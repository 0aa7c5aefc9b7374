//! clext - Command-line front end for the clex lexer.
//!
//! This is the main entry point for the clext CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    common::OutputFormat,
    init::{run_init, InitArgs},
    stats::{run_stats, StatsArgs},
    tokens::{run_tokens, TokensArgs},
};
use config::Config;
use error::{ClextError, Result};

/// clext - Tokenize and check clex source files
#[derive(Parser, Debug)]
#[command(name = "clext")]
#[command(author = "Clex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and check clex source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CLEXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CLEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CLEXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the clext CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each file
    ///
    /// Unknown characters become single-character identifiers unless
    /// --strict is given.
    Tokens(TokensCommand),

    /// Report every lexical error in each file
    ///
    /// Exits with a non-zero status if any file has an error.
    Check(CheckCommand),

    /// Count tokens per kind
    Stats(StatsCommand),

    /// Write a clext.toml with the current settings
    ///
    /// Values come from the loaded configuration, so the defaults are
    /// written when no configuration file exists yet.
    Init(InitCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Fail on the first lexical error
    #[arg(short, long)]
    strict: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Arguments for the stats subcommand.
#[derive(Parser, Debug)]
struct StatsCommand {
    /// Input files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Fail on the first lexical error
    #[arg(short, long)]
    strict: bool,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write clext.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing clext.toml
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the clext CLI.
///
/// Errors are printed to stderr and turned into a failing exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

/// Load configuration, initialize logging and execute the selected command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, &config)
}

/// Initialize the logging system.
///
/// Logs go to stderr. `RUST_LOG` overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ClextError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
///
/// Command-line flags take precedence over configuration values.
fn execute_command(command: Commands, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err_out = stderr.lock();

    match command {
        Commands::Tokens(args) => {
            let tokens_args = TokensArgs {
                files: args.files,
                format: args.format.unwrap_or(config.output.format),
                strict: args.strict || config.lexer.strict,
            };
            run_tokens(&tokens_args, &mut out, &mut err_out)
        },
        Commands::Check(args) => {
            let check_args = CheckArgs { files: args.files };
            run_check(&check_args, &mut out, &mut err_out)
        },
        Commands::Stats(args) => {
            let stats_args = StatsArgs {
                files: args.files,
                format: args.format.unwrap_or(config.output.format),
                strict: args.strict || config.lexer.strict,
            };
            run_stats(&stats_args, &mut out, &mut err_out)
        },
        Commands::Init(args) => {
            let init_args = InitArgs {
                path: args.path,
                force: args.force,
            };
            run_init(&init_args, config, &mut out)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["clext", "tokens", "main.cs"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("main.cs")]);
            assert_eq!(args.format, None);
            assert!(!args.strict);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_format() {
        let cli = Cli::parse_from(["clext", "tokens", "a.cs", "b.cs", "--format", "json"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.files.len(), 2);
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_strict() {
        let cli = Cli::parse_from(["clext", "tokens", "--strict", "a.cs"]);
        if let Commands::Tokens(args) = cli.command {
            assert!(args.strict);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["clext", "tokens", "a.cs", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_files() {
        assert!(Cli::try_parse_from(["clext", "check"]).is_err());
        assert!(Cli::try_parse_from(["clext", "stats"]).is_err());
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["clext", "check", "a.cs"]);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn test_cli_parse_stats() {
        let cli = Cli::parse_from(["clext", "stats", "-F", "json", "a.cs"]);
        if let Commands::Stats(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Stats command");
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["clext", "init", "--path", "/tmp/project", "--force"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/project")));
            assert!(args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["clext", "--verbose", "check", "a.cs"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["clext", "check", "a.cs", "--config", "/path/to/clext.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/clext.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["clext", "--no-color", "check", "a.cs"]);
        assert!(cli.no_color);
    }
}
