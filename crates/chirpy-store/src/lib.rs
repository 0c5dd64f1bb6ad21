//! # Chirpy Store
//!
//! Persistence for chirps and users. Provides the [`Store`] trait with a
//! single-file implementation and an in-memory one.
//!
//! ## Key Types
//!
//! - [`Store`] - The trait for all storage operations
//! - [`FileStore`] - Whole-snapshot storage in one JSON file
//! - [`MemoryStore`] - In-memory storage for tests
//! - [`StoreError`] - `Io`, `Format`, `NotFound`, `Auth`, `Password`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chirpy_store::{FileStore, Store};
//!
//! let store = FileStore::open_default("database.json").unwrap();
//! let chirp = store.create_chirp("hello").unwrap();
//! assert_eq!(store.get_chirp(chirp.id).unwrap().body, "hello");
//!
//! store.create_user("a@x.com", "secret").unwrap();
//! let user = store.login("a@x.com", "secret").unwrap();
//! assert_eq!(user.email, "a@x.com");
//! ```
//!
//! ## Design Notes
//!
//! - **Whole snapshot**: every operation reads the entire file; every write
//!   rewrites it. There is no cache in front of the file.
//! - **One lock**: a reader/writer lock per store. Creates hold it exclusively
//!   for the full read-modify-write, so concurrent creates never lose updates.
//! - **Atomic replace**: writes go to a temporary file that is renamed over
//!   the snapshot, so a crash never leaves a truncated file behind.
//! - **Single process**: no cross-process locking.

mod auth;
pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::Store;
