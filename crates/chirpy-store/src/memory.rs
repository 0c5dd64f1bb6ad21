//! In-memory implementation of the Store trait.
//!
//! This is primarily for testing. It has the same semantics as the file
//! store but keeps the snapshot in memory with no persistence.

use std::sync::{PoisonError, RwLock};

use chirpy_core::{Chirp, ChirpId, HashParams, PasswordHasher, Snapshot, User};

use crate::auth::authenticate;
use crate::error::{Result, StoreError};
use crate::traits::Store;

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    inner: RwLock<Snapshot>,
    hasher: PasswordHasher,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new(params: HashParams) -> Result<Self> {
        Self::with_snapshot(Snapshot::empty(), params)
    }

    /// Create a store seeded with `snapshot`.
    pub fn with_snapshot(snapshot: Snapshot, params: HashParams) -> Result<Self> {
        snapshot.check_consistency()?;
        Ok(Self {
            inner: RwLock::new(snapshot),
            hasher: PasswordHasher::new(params)?,
        })
    }
}

impl Store for MemoryStore {
    fn create_chirp(&self, body: &str) -> Result<Chirp> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.insert_chirp(body))
    }

    fn get_chirps(&self) -> Result<Vec<Chirp>> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.chirps_sorted())
    }

    fn get_chirp(&self, id: ChirpId) -> Result<Chirp> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.chirp(id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn create_user(&self, email: &str, password: &str) -> Result<User> {
        let hash = self.hasher.hash(password)?;
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.upsert_user(email, hash))
    }

    fn login(&self, email: &str, password: &str) -> Result<User> {
        let user = {
            let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
            inner.user(email).cloned()
        };
        authenticate(&self.hasher, user, password)
    }

    fn snapshot(&self) -> Result<Snapshot> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.clone())
    }
}
