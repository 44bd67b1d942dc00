use thiserror::Error;

/// Errors that can occur when operating on the document directory
#[derive(Debug, Error)]
pub enum StoreError {
    /// No document with the given name exists
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Name contains path separators or dot-segments and is never resolved
    /// against the filesystem
    #[error("Invalid document name: {0}")]
    InvalidName(String),

    /// Underlying filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Whether this error means the document simply does not exist.
    ///
    /// Invalid names count: they can never name a stored document, so the
    /// handlers treat them exactly like a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_) | StoreError::InvalidName(_))
    }
}
