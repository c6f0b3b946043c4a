//! Application-wide error types.

use thiserror::Error;

/// Application error types.
///
/// The message carried by each variant is what clients see, so it is kept as
/// the raw underlying message.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request body or multipart form.
    #[error("{0}")]
    BadRequest(String),

    /// Path identifier is not an integer.
    ///
    /// Reported as a server error for compatibility with existing clients.
    #[error("{0}")]
    InvalidIdentifier(String),

    /// Database error.
    #[error("{0}")]
    Database(String),

    /// Object storage error.
    #[error("{0}")]
    Storage(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::InvalidIdentifier(_) | Self::Database(_) | Self::Storage(_) => 500,
        }
    }

    /// Returns the error code used in logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::InvalidIdentifier(_) => "INVALID_IDENTIFIER",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}
