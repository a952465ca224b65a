//! File-backed `tracing` setup. The terminal belongs to the TUI, so log
//! output never goes to stdout or stderr.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Errors that can occur while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file or its directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("could not install log subscriber: {0}")]
    Install(String),
}

/// Opens `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Installs the global subscriber described by `config`.
///
/// Returns `Ok(false)` when logging is disabled (no log file resolved).
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(config: &Config) -> Result<bool, LoggingError> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };
    let filter = EnvFilter::try_new(&config.log_filter)?;
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("app.log");
        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "hello").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn directory_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_log_file(dir.path());
        assert!(matches!(result, Err(LoggingError::Io(_))));
    }

    #[test]
    fn disabled_config_installs_nothing() {
        let config = Config {
            log_filter: "info".to_string(),
            log_file: None,
        };
        assert!(matches!(init(&config), Ok(false)));
    }

    #[test]
    fn bad_filter_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_filter: "startup_check=notalevel".to_string(),
            log_file: Some(dir.path().join("app.log")),
        };
        assert!(matches!(init(&config), Err(LoggingError::Filter(_))));
    }
}
