//! # Chirpy
//!
//! The application API for Chirpy: short text posts ("chirps") and
//! password-authenticated user accounts, persisted in a single snapshot file.
//!
//! ## Overview
//!
//! [`Chirpy`] sits between a transport layer (HTTP handlers, a CLI, tests)
//! and a [`Store`]. It applies the rules the store does not:
//!
//! - **Length limit**: chirps longer than the configured maximum are rejected
//! - **Redaction**: configured words are replaced with `****`
//! - **Public views**: users are returned as [`UserView`], never with a hash
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chirpy::{Chirpy, ChirpyConfig};
//!
//! let chirpy = Chirpy::open(ChirpyConfig::default().with_db_path("database.json")).unwrap();
//!
//! let chirp = chirpy.post_chirp("what a kerfuffle").unwrap();
//! assert_eq!(chirp.body, "what a ****");
//!
//! chirpy.register("a@x.com", "secret").unwrap();
//! let user = chirpy.login("a@x.com", "secret").unwrap();
//! assert_eq!(user.email, "a@x.com");
//! ```
//!
//! ## Re-exports
//!
//! - `chirpy::core` - Records, snapshot, codec, hashing, validation
//! - `chirpy::store` - The `Store` trait and its implementations

pub mod error;
pub mod service;

pub use chirpy_core as core;
pub use chirpy_store as store;

pub use error::{ChirpyError, Result};
pub use service::{Chirpy, ChirpyConfig, UserView};

pub use chirpy_core::{Chirp, ChirpId, HashParams, User, UserId};
pub use chirpy_store::{FileStore, MemoryStore, Store, StoreError};
