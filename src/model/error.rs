//! Error types for the icv application.
//!
//! A small hierarchical taxonomy built on `thiserror`, composing via `From`
//! and `?`. Fetch and terminal errors are fatal; per-record parse errors are
//! non-fatal and only logged, so the UI stays functional with partial data.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error wrapping all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to retrieve issue data. Fatal: there is nothing to browse.
    #[error("Failed to fetch issues: {0}")]
    Fetch(#[from] FetchError),

    /// The issue payload as a whole was unusable. Fatal; individual bad
    /// records inside a well-formed payload are skipped instead.
    #[error("Failed to parse issue data: {0}")]
    Parse(#[from] ParseError),

    /// Terminal or TUI rendering error. Fatal: without a working terminal
    /// the UI cannot function.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Logging could not be set up. Fatal: the TUI owns the terminal, so
    /// running without a log sink would leave failures invisible.
    #[error("Failed to set up logging: {0}")]
    Logging(#[from] LoggingError),
}

/// Errors installing the file-backed tracing subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("Failed to create log directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configured log path names no file.
    #[error("Log path {path} has no file name")]
    BadLogPath {
        /// The offending path.
        path: PathBuf,
    },

    /// A global tracing subscriber is already installed.
    #[error("A tracing subscriber is already installed")]
    AlreadyInstalled,
}

/// Errors retrieving the issue payload from an endpoint or fixture file.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-success status.
    #[error("Issues endpoint {url} returned status {status}")]
    Endpoint {
        /// Endpoint URL that was queried.
        url: String,
        /// HTTP status code received.
        status: u16,
    },

    /// Transport-level HTTP failure (DNS, TLS, connect, read).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The fixture file does not exist.
    #[error("Issue fixture not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// I/O failure reading a fixture file.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors parsing the issue payload.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The payload was not valid JSON.
    #[error("Invalid JSON: {reason}")]
    InvalidJson {
        /// Decoder error message.
        reason: String,
    },

    /// The payload was valid JSON but not an array of records.
    #[error("Expected an array of issue records")]
    NotAnArray,

    /// One record in the array did not match the issue shape. Non-fatal:
    /// the record is skipped and the rest of the payload is kept.
    #[error("Malformed issue record at index {index}: {reason}")]
    MalformedRecord {
        /// Zero-based index of the record in the payload array.
        index: usize,
        /// Decoder error message.
        reason: String,
    },
}
