//! HTTP issue source.
//!
//! One authenticated read-only GET. No pagination, no retries, no caching:
//! the endpoint returns the full array of issue-like records in a single
//! response.

use crate::model::FetchError;
use tracing::{debug, info};

/// The remote issues endpoint.
#[derive(Debug)]
pub struct HttpSource {
    url: String,
    token: Option<String>,
}

impl HttpSource {
    /// Create a source for `url`, authenticated with `token` when present.
    pub fn new(url: String, token: Option<String>) -> Self {
        Self { url, token }
    }

    /// The endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Perform the GET and return the raw response body.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Endpoint` for non-success statuses and
    /// `FetchError::Transport` for connection-level failures.
    pub fn fetch(&self) -> Result<String, FetchError> {
        debug!(url = %self.url, "Fetching issues");

        let client = reqwest::blocking::Client::new();
        let mut request = client.get(&self.url);
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("token {token}"));
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Endpoint {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        info!(url = %self.url, bytes = body.len(), "Fetched issue payload");
        Ok(body)
    }
}
