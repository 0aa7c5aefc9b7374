//! Init command implementation.
//!
//! Writes a `clext.toml` holding the current effective configuration.

use std::io::Write;
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{ClextError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Directory to write the configuration file into (default: current
    /// directory).
    pub path: Option<PathBuf>,
    /// Overwrite an existing configuration file.
    pub force: bool,
}

/// Run the init command.
///
/// The directory is created if missing. An existing `clext.toml` is only
/// replaced with `force`.
pub fn run_init(args: &InitArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let dir = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    if dir.exists() && !dir.is_dir() {
        return Err(ClextError::FileOperation(format!(
            "Target path is not a directory: {}",
            dir.display()
        )));
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() && !args.force {
        return Err(ClextError::Config(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }

    config.save_to_path(&config_path)?;
    tracing::debug!(path = %config_path.display(), "wrote configuration");
    writeln!(out, "Created {}", config_path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::common::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("project");
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;

        let mut out: Vec<u8> = Vec::new();
        let args = InitArgs {
            path: Some(target.clone()),
            force: false,
        };
        run_init(&args, &config, &mut out).unwrap();

        let loaded = Config::load_from_path(&target.join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(loaded, config);
        assert!(String::from_utf8(out).unwrap().starts_with("Created "));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "verbose = true\n").unwrap();

        let args = InitArgs {
            path: Some(dir.path().to_path_buf()),
            force: false,
        };
        let err = run_init(&args, &Config::default(), &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, ClextError::Config(_)));

        let forced = InitArgs { force: true, ..args };
        run_init(&forced, &Config::default(), &mut Vec::<u8>::new()).unwrap();
        let loaded = Config::load_from_path(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(!loaded.verbose);
    }

    #[test]
    fn test_init_rejects_file_target() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("not_a_dir");
        std::fs::write(&file, "").unwrap();

        let args = InitArgs {
            path: Some(file),
            force: true,
        };
        let err = run_init(&args, &Config::default(), &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, ClextError::FileOperation(_)));
    }
}
