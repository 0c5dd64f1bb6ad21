//! # Chirpy Core
//!
//! Pure primitives for Chirpy: chirp and user records, the snapshot aggregate,
//! the snapshot codec, password hashing, and chirp body validation.
//!
//! This crate performs no file I/O. Persistence lives in `chirpy-store`.
//!
//! ## Key Types
//!
//! - [`Chirp`] - A short immutable text post
//! - [`User`] - An account keyed by email, holding a password hash
//! - [`Snapshot`] - The whole persisted state; the unit of every read and write
//! - [`PasswordHasher`] - Argon2id hashing with configurable work factor
//!
//! ## Codec
//!
//! Snapshots are encoded as a single JSON document. See the [`codec`] module.

pub mod codec;
pub mod error;
pub mod password;
pub mod snapshot;
pub mod types;
pub mod validation;

pub use codec::{decode, encode, encode_pretty};
pub use error::{FormatError, PasswordError, ValidationError};
pub use password::{HashParams, PasswordHasher};
pub use snapshot::Snapshot;
pub use types::{Chirp, ChirpId, PasswordHash, User, UserId};
pub use validation::{redact, validate_chirp, DEFAULT_PROFANITY, MAX_CHIRP_LENGTH, REDACTED};
