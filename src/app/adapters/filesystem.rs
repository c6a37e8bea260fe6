//! Bulletin source that replays a saved page from disk

use std::path::{Path, PathBuf};
use tracing::info;

use super::http::BulletinSource;
use crate::{Error, Result};

/// Serves the contents of one saved bulletin file
///
/// The requested address is ignored; the file stands in for the source. Bytes
/// are decoded the same way as over HTTP so saved pages parse identically.
#[derive(Debug, Clone)]
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BulletinSource for LocalFileSource {
    async fn fetch(&self, uri: &str) -> Result<String> {
        info!(
            "Reading saved bulletin {} in place of {}",
            self.path.display(),
            uri
        );

        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            Error::io(
                format!("Failed to read bulletin file {}", self.path.display()),
                e,
            )
        })?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
