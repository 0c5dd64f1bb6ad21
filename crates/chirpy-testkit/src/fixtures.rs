//! Test fixtures and helpers.
//!
//! Each fixture owns a temporary directory; the snapshot file goes away with
//! the fixture.

use std::path::PathBuf;

use tempfile::TempDir;

use chirpy::{Chirpy, ChirpyConfig};
use chirpy_core::HashParams;
use chirpy_store::{FileStore, Store};

/// File name used for the snapshot inside the fixture directory.
pub const DB_FILE: &str = "database.json";

/// A file-backed store in its own temporary directory.
pub struct TestFixture {
    pub dir: TempDir,
    pub store: FileStore,
}

impl TestFixture {
    /// Create a fixture with an empty snapshot file.
    pub fn new() -> Self {
        Self::with_params(HashParams::default())
    }

    /// Create a fixture with custom hashing parameters.
    pub fn with_params(params: HashParams) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = FileStore::open(dir.path().join(DB_FILE), params).expect("open store");
        Self { dir, store }
    }

    /// Path of the snapshot file.
    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join(DB_FILE)
    }

    /// Raw bytes currently on disk.
    pub fn raw(&self) -> Vec<u8> {
        std::fs::read(self.db_path()).expect("read snapshot file")
    }

    /// A second store over the same file, as after a restart.
    pub fn reopen(&self) -> FileStore {
        FileStore::open_default(self.db_path()).expect("reopen store")
    }

    /// A service over a fresh store on the same file.
    pub fn chirpy(&self) -> Chirpy {
        let config = ChirpyConfig::default().with_db_path(self.db_path());
        Chirpy::open(config).expect("open chirpy")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A fixture holding `chirps` chirps ("chirp 1", "chirp 2", ...) and `users`
/// users (`user1@example.com` with password `password1`, ...).
pub fn seeded_fixture(chirps: usize, users: usize) -> TestFixture {
    let fixture = TestFixture::new();
    for i in 1..=chirps {
        fixture
            .store
            .create_chirp(&format!("chirp {}", i))
            .expect("seed chirp");
    }
    for i in 1..=users {
        fixture
            .store
            .create_user(&format!("user{}@example.com", i), &format!("password{}", i))
            .expect("seed user");
    }
    fixture
}
