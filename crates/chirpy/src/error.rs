//! Error types for the Chirpy API.

use chirpy_core::ValidationError;
use chirpy_store::StoreError;
use thiserror::Error;

/// Errors that can occur during Chirpy operations.
#[derive(Debug, Error)]
pub enum ChirpyError {
    /// The chirp was rejected before reaching the store.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ChirpyError {
    /// The requested chirp does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ChirpyError::Store(StoreError::NotFound(_)))
    }

    /// A login was rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ChirpyError::Store(StoreError::Auth))
    }

    /// The caller sent something invalid, as opposed to a server-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ChirpyError::Validation(_)) || self.is_not_found() || self.is_unauthorized()
    }
}

/// Result type for Chirpy operations.
pub type Result<T> = std::result::Result<T, ChirpyError>;
