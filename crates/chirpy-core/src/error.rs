//! Error types for Chirpy Core.

use thiserror::Error;

/// The bytes on disk do not decode to a valid snapshot.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("snapshot is empty")]
    Empty,

    #[error("malformed snapshot: {0}")]
    Malformed(String),

    #[error("inconsistent snapshot: {0}")]
    Inconsistent(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(e: serde_json::Error) -> Self {
        FormatError::Malformed(e.to_string())
    }
}

/// Password hashing failures.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("hash parameters below minimum: {0}")]
    WeakParams(String),

    #[error("invalid hash parameters: {0}")]
    InvalidParams(String),

    #[error("password hashing failed: {0}")]
    Hashing(String),
}

/// Chirp body validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("chirp is too long: {len} characters, maximum is {max}")]
    TooLong { len: usize, max: usize },
}
