//! Page archive
//!
//! One text file per run that collects every fetched page body. The file is
//! removed at the start of a run, appended to while pages are fetched, and
//! read back once for link extraction.

use crate::error::ArchiveError;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Append-only page archive on disk
#[derive(Debug, Clone)]
pub struct Archive {
    path: PathBuf,
}

impl Archive {
    /// Archive backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Archive named `<base_domain>.html` inside `dir`
    pub fn for_domain(dir: &Path, base_domain: &str) -> Self {
        Self::new(dir.join(format!("{base_domain}.html")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove a stale archive left by a previous run
    ///
    /// Returns `Ok(false)` when there was nothing to remove.
    pub async fn reset(&self) -> Result<bool, ArchiveError> {
        match tokio::fs::metadata(&self.path).await {
            Ok(meta) if meta.is_file() => {}
            _ => return Ok(false),
        }

        tokio::fs::remove_file(&self.path)
            .await
            .map_err(|source| ArchiveError::Remove {
                path: self.path.clone(),
                source,
            })?;
        Ok(true)
    }

    /// Append one page body followed by a newline
    ///
    /// Empty bodies still produce a line.
    pub async fn append(&self, text: &str) -> Result<(), ArchiveError> {
        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await
            .map_err(|source| ArchiveError::Open {
                path: self.path.clone(),
                source,
            })?;

        let write_err = |source| ArchiveError::Write {
            path: self.path.clone(),
            source,
        };
        file.write_all(text.as_bytes()).await.map_err(write_err)?;
        file.write_all(b"\n").await.map_err(write_err)?;
        file.flush().await.map_err(write_err)?;
        Ok(())
    }

    /// Read the whole archive
    pub async fn read_to_string(&self) -> Result<String, ArchiveError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| ArchiveError::Read {
                path: self.path.clone(),
                source,
            })?;
        Ok(String::from_utf8_lossy(&bytes).to_string())
    }
}
