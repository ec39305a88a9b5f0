//! # Config Loader
//!
//! Load-and-echo of the file named by `--config`.
//!
//! The file has no schema yet. It is read line by line so that its presence and
//! readability can be checked, and under `--verbose` every non-empty line is
//! echoed back as `Config: <line>`. Nothing is parsed or interpreted.
use crate::core::prompt::Console;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why `--config` could not be used.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be opened.
    #[error("Config file '{path}' could not be opened: {source}")]
    Open {
        /// File named by `--config`.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },
    /// Reading failed partway through.
    #[error("Config file '{path}' could not be read: {source}")]
    Read {
        /// File named by `--config`.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },
}

/// The raw lines of a config file, blank lines removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// Where the lines came from.
    pub path: PathBuf,
    /// Non-empty lines, untrimmed, in file order.
    pub lines: Vec<String>,
}

impl ConfigFile {
    /// Reads the whole file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the file is missing or unreadable.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            if !line.trim().is_empty() {
                lines.push(line);
            }
        }
        log::debug!("Loaded {} config lines from {}", lines.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            lines,
        })
    }
}

/// Loads the config file and echoes it when `verbose`.
///
/// A missing or unreadable file is never fatal; it is logged and ignored.
pub fn load_and_echo(path: &Path, verbose: bool, console: &mut Console<'_>) -> Option<ConfigFile> {
    match ConfigFile::load(path) {
        Ok(config) => {
            if verbose {
                for line in &config.lines {
                    console.say(format!("{} {}", t!("config.echo_prefix"), line));
                }
            }
            Some(config)
        }
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let file = write_config("theme: dark\n\n   \nverbose: true\n");
        let config = ConfigFile::load(file.path()).unwrap();
        assert_eq!(config.lines, vec!["theme: dark", "verbose: true"]);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigFile::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Open { .. }));
    }

    #[test]
    fn test_echo_only_when_verbose() {
        let file = write_config("a: 1\n\nb: 2\n");
        let mut input = Cursor::new(Vec::new());

        let (mut out, mut err) = (Vec::new(), Vec::new());
        {
            let mut console = Console::new(&mut input, &mut out, &mut err);
            assert!(load_and_echo(file.path(), true, &mut console).is_some());
        }
        assert_eq!(String::from_utf8(out).unwrap(), "Config: a: 1\nConfig: b: 2\n");

        let (mut out, mut err) = (Vec::new(), Vec::new());
        {
            let mut console = Console::new(&mut input, &mut out, &mut err);
            assert!(load_and_echo(file.path(), false, &mut console).is_some());
            assert!(load_and_echo(Path::new("/nonexistent/ghostctl.yaml"), true, &mut console).is_none());
        }
        assert!(out.is_empty());
    }
}
