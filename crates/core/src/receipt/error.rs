//! Receipt error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Receipt operation errors.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Storage operation failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Repository operation failed.
    #[error("{0}")]
    Repository(String),
}

impl ReceiptError {
    /// Create a repository error.
    #[must_use]
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }
}
