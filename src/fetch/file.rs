//! File issue source for fixtures and offline demos.

use crate::model::FetchError;
use std::path::{Path, PathBuf};
use tracing::info;

/// A local JSON fixture holding an issue payload.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given fixture path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The fixture path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the fixture body.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::FileNotFound` for a missing file and
    /// `FetchError::Io` for other read failures.
    pub fn load(&self) -> Result<String, FetchError> {
        if !self.path.exists() {
            return Err(FetchError::FileNotFound {
                path: self.path.clone(),
            });
        }

        let body = std::fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), bytes = body.len(), "Loaded issue fixture");
        Ok(body)
    }
}
