//! Error types for the store module.

use chirpy_core::{ChirpId, FormatError, PasswordError};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file does not hold a valid snapshot.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// No chirp with this id.
    #[error("chirp not found: {0}")]
    NotFound(ChirpId),

    /// Login failed. Unknown email and wrong password look the same.
    #[error("invalid credentials")]
    Auth,

    /// Password hashing failed or was misconfigured.
    #[error("password error: {0}")]
    Password(#[from] PasswordError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
