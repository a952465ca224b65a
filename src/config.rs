//! Runtime settings, read from the environment.
//!
//! There is no config file. Two variables are recognised:
//!
//! - `STARTUP_CHECK_LOG`: a `tracing` filter directive (default `info`).
//! - `STARTUP_CHECK_LOG_FILE`: where to write the log. Defaults to
//!   `<data_local_dir>/startup-check/startup-check.log`.

use std::path::PathBuf;

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_VAR: &str = "STARTUP_CHECK_LOG";
/// Environment variable overriding the log file path.
pub const LOG_FILE_VAR: &str = "STARTUP_CHECK_LOG_FILE";

const DEFAULT_FILTER: &str = "info";
const APP_DIR: &str = "startup-check";
const LOG_FILE_NAME: &str = "startup-check.log";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Filter directive passed to the log subscriber.
    pub log_filter: String,
    /// Log destination; `None` disables logging.
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Reads settings from the process environment.
    #[mutants::skip]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok(), dirs::data_local_dir())
    }

    /// Builds settings from a variable lookup and the platform data directory.
    ///
    /// Empty variables are treated as unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>, data_dir: Option<PathBuf>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let log_filter = var(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let log_file = var(LOG_FILE_VAR)
            .map(PathBuf::from)
            .or_else(|| data_dir.map(|d| d.join(APP_DIR).join(LOG_FILE_NAME)));
        Self {
            log_filter,
            log_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_use_data_dir() {
        let config = Config::from_vars(lookup(&[]), Some(PathBuf::from("/data")));
        assert_eq!(config.log_filter, "info");
        assert_eq!(
            config.log_file,
            Some(PathBuf::from("/data/startup-check/startup-check.log"))
        );
    }

    #[test]
    fn no_data_dir_disables_logging() {
        let config = Config::from_vars(lookup(&[]), None);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn filter_override() {
        let config = Config::from_vars(lookup(&[(LOG_FILTER_VAR, "debug")]), None);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn file_override_wins_over_data_dir() {
        let config = Config::from_vars(
            lookup(&[(LOG_FILE_VAR, "/tmp/check.log")]),
            Some(PathBuf::from("/data")),
        );
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/check.log")));
    }

    #[test]
    fn empty_values_are_ignored() {
        let config = Config::from_vars(
            lookup(&[(LOG_FILTER_VAR, ""), (LOG_FILE_VAR, "")]),
            Some(PathBuf::from("/data")),
        );
        assert_eq!(config.log_filter, "info");
        assert_eq!(
            config.log_file,
            Some(PathBuf::from("/data/startup-check/startup-check.log"))
        );
    }
}
