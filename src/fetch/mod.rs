//! Issue payload sources.
//!
//! Two ways to obtain the raw issue payload:
//! - HTTP: one authenticated read-only GET against the issues endpoint
//! - File: a local JSON fixture, for offline use and tests
//!
//! Both return the raw body; parsing happens at the boundary in
//! `crate::parser`.

use crate::model::FetchError;
use std::path::PathBuf;

pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::HttpSource;

/// Unified issue payload source. Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum IssueSource {
    /// Remote issues endpoint.
    Endpoint(HttpSource),
    /// Local JSON fixture.
    File(FileSource),
}

impl IssueSource {
    /// Retrieve the raw payload body.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for HTTP or file I/O failures.
    pub fn fetch(&self) -> Result<String, FetchError> {
        match self {
            IssueSource::Endpoint(http) => http.fetch(),
            IssueSource::File(file) => file.load(),
        }
    }

    /// Human-readable description of where the payload comes from.
    pub fn describe(&self) -> String {
        match self {
            IssueSource::Endpoint(http) => http.url().to_string(),
            IssueSource::File(file) => file.path().display().to_string(),
        }
    }
}

/// Select a source: a fixture file when one is given, the endpoint otherwise.
pub fn detect_source(
    fixture: Option<PathBuf>,
    url: String,
    token: Option<String>,
) -> IssueSource {
    match fixture {
        Some(path) => IssueSource::File(FileSource::new(path)),
        None => IssueSource::Endpoint(HttpSource::new(url, token)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_path_selects_file_source() {
        let source = detect_source(
            Some(PathBuf::from("issues.json")),
            "https://example.com/issues".to_string(),
            None,
        );
        assert!(matches!(source, IssueSource::File(_)));
        assert_eq!(source.describe(), "issues.json");
    }

    #[test]
    fn no_fixture_selects_endpoint() {
        let source = detect_source(None, "https://example.com/issues".to_string(), None);
        assert!(matches!(source, IssueSource::Endpoint(_)));
        assert_eq!(source.describe(), "https://example.com/issues");
    }
}
