//! Flat-directory document store.
//!
//! All operations resolve a document name against a single root directory.
//! Names carrying path separators or dot-segments are rejected before they
//! ever touch the filesystem, so a request can only reach files directly
//! inside the root.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::StoreError;

/// Check that a document name is safe to resolve against the store root.
///
/// A valid name is non-empty, is not `.` or `..`, and contains no path
/// separators or NUL bytes.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// A document store backed by one flat directory.
///
/// Cheap to clone; clones share the same root path.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is not created here; the binary ensures it exists at
    /// startup and tests use a pre-created temp dir.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List all document names, sorted alphabetically.
    ///
    /// Subdirectories and files with non-UTF-8 names are skipped.
    pub async fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        let mut dir = fs::read_dir(&self.root).await?;

        while let Some(entry) = dir.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    /// Read the full content of a document.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.resolve(name)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Create or fully overwrite a document.
    pub async fn write(&self, name: &str, content: &[u8]) -> Result<(), StoreError> {
        let path = self.resolve(name)?;
        fs::write(&path, content).await?;
        debug!(name, bytes = content.len(), "wrote document");
        Ok(())
    }

    /// Delete a document.
    ///
    /// Deleting a document that does not exist is a success, so delete is
    /// idempotent.
    pub async fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = self.resolve(name)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(name, "deleted document");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether a document with this name exists.
    pub async fn exists(&self, name: &str) -> bool {
        match self.resolve(name) {
            Ok(path) => fs::try_exists(&path).await.unwrap_or(false),
            Err(_) => false,
        }
    }

    /// Resolve a name to its path inside the root, refusing unsafe names.
    fn resolve(&self, name: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_name(name) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(name))
    }
}

// =============================================================================
// Tests
// =============================================================================
