//! # Chirpy Testkit
//!
//! Testing utilities for Chirpy.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Snapshots with their exact encoded bytes, pinning the file format
//! - **Generators**: Proptest strategies for bodies, emails, and consistent snapshots
//! - **Fixtures**: A file-backed store or service in a throwaway directory
//!
//! ## Golden Vectors
//!
//! ```rust
//! use chirpy_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, _json) in verify_all_vectors() {
//!     assert!(matches, "{} drifted", name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use chirpy_testkit::generators::snapshot;
//!
//! proptest! {
//!     #[test]
//!     fn snapshot_roundtrips(s in snapshot(16, 8)) {
//!         let bytes = chirpy_core::encode(&s).unwrap();
//!         prop_assert_eq!(chirpy_core::decode(&bytes).unwrap(), s);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use chirpy_store::Store;
//! use chirpy_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! fixture.store.create_chirp("hello").unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{seeded_fixture, TestFixture};
pub use generators::{snapshot, SnapshotParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
