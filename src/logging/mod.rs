//! Tracing setup for the card browser.
//!
//! The TUI owns the terminal, so log output goes to the file named in the
//! resolved configuration; watch it with `tail -f` in another terminal.

use crate::config::ResolvedConfig;
use crate::model::LoggingError;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, writing to the configured log
/// file. The log directory is created when missing.
///
/// Honors `RUST_LOG`; the default filter is `info`.
///
/// # Errors
///
/// Returns [`LoggingError`] when the configured path has no file name, the
/// log directory cannot be created, or a subscriber is already installed.
pub fn init(config: &ResolvedConfig) -> Result<(), LoggingError> {
    let (directory, file_name) = split_log_path(&config.log_file_path)?;

    if !directory.as_os_str().is_empty() {
        std::fs::create_dir_all(directory).map_err(|source| LoggingError::CreateDir {
            path: directory.to_path_buf(),
            source,
        })?;
    }

    let appender = tracing_appender::rolling::never(directory, file_name);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        // Log files stay free of ANSI escapes.
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)
}

/// Split the configured log path into its directory and file name.
fn split_log_path(path: &Path) -> Result<(&Path, &str), LoggingError> {
    let file_name = path.file_name().and_then(|name| name.to_str());
    match (path.parent(), file_name) {
        (Some(directory), Some(file_name)) => Ok((directory, file_name)),
        _ => Err(LoggingError::BadLogPath {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use std::path::PathBuf;

    fn config_logging_to(path: PathBuf) -> ResolvedConfig {
        ResolvedConfig {
            log_file_path: path,
            ..ResolvedConfig::default()
        }
    }

    #[test]
    fn path_without_file_name_is_rejected() {
        let config = config_logging_to(PathBuf::from("/"));
        assert!(matches!(
            init(&config),
            Err(LoggingError::BadLogPath { .. })
        ));
    }

    #[test]
    fn split_keeps_directory_and_file_name() {
        let (directory, file_name) =
            split_log_path(Path::new("/var/log/icv/icv.log")).unwrap();
        assert_eq!(directory, Path::new("/var/log/icv"));
        assert_eq!(file_name, "icv.log");
    }

    #[test]
    fn bare_file_name_splits_to_empty_directory() {
        let (directory, file_name) = split_log_path(Path::new("icv.log")).unwrap();
        assert!(directory.as_os_str().is_empty());
        assert_eq!(file_name, "icv.log");
    }

    #[test]
    #[serial(tracing_init)]
    fn init_creates_log_directory_if_missing() {
        let test_dir = std::env::temp_dir().join("icv_test_logs_create");
        let _ = fs::remove_dir_all(&test_dir);
        let config = config_logging_to(test_dir.join("icv.log"));

        // May fail if a subscriber is already set; the directory is created
        // either way.
        let _ = init(&config);

        assert!(test_dir.exists(), "log directory should be created");
        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_subscriber_already_installed() {
        let test_dir = std::env::temp_dir().join("icv_test_logs_twice");
        let config = config_logging_to(test_dir.join("icv.log"));

        let first = init(&config);
        let second = init(&config);

        // Whichever call found the subscriber installed, at most one succeeds.
        assert!(first.is_err() || second.is_err());
        let _ = fs::remove_dir_all(&test_dir);
    }
}
