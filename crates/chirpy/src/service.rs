//! The Chirpy service: validation and redaction in front of a store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use chirpy_core::{
    redact, validate_chirp, Chirp, ChirpId, HashParams, User, UserId, DEFAULT_PROFANITY,
    MAX_CHIRP_LENGTH,
};
use chirpy_store::{FileStore, Store};

use crate::error::Result;

/// Configuration for Chirpy.
#[derive(Debug, Clone)]
pub struct ChirpyConfig {
    /// Snapshot file used by [`Chirpy::open`].
    pub db_path: PathBuf,
    /// Password hashing work factor.
    pub hash: HashParams,
    /// Maximum chirp length in characters.
    pub max_chirp_length: usize,
    /// Words redacted from chirp bodies, matched case-insensitively.
    pub profanity: Vec<String>,
}

impl Default for ChirpyConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("database.json"),
            hash: HashParams::default(),
            max_chirp_length: MAX_CHIRP_LENGTH,
            profanity: DEFAULT_PROFANITY.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl ChirpyConfig {
    pub fn with_db_path(mut self, path: impl AsRef<Path>) -> Self {
        self.db_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_hash_params(mut self, hash: HashParams) -> Self {
        self.hash = hash;
        self
    }

    pub fn with_max_chirp_length(mut self, max: usize) -> Self {
        self.max_chirp_length = max;
        self
    }

    pub fn with_profanity<I, W>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        self.profanity = words.into_iter().map(Into::into).collect();
        self
    }
}

/// A user as shown to clients: no password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: UserId,
    pub email: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// The main Chirpy struct.
///
/// Cheap to clone; clones share one store.
pub struct Chirpy<S: Store = FileStore> {
    store: Arc<S>,
    config: ChirpyConfig,
}

impl Chirpy<FileStore> {
    /// Open (or create) the snapshot file named in `config`.
    pub fn open(config: ChirpyConfig) -> Result<Self> {
        let store = FileStore::open(&config.db_path, config.hash)?;
        Ok(Self::new(store, config))
    }
}

impl<S: Store> Chirpy<S> {
    /// Wrap an existing store.
    pub fn new(store: S, config: ChirpyConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ChirpyConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Chirps
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate, redact, and store a chirp.
    ///
    /// The stored (and returned) body is the redacted one.
    pub fn post_chirp(&self, body: &str) -> Result<Chirp> {
        validate_chirp(body, self.config.max_chirp_length)?;
        let cleaned = redact(body, &self.config.profanity);
        if cleaned != body {
            debug!("redacted chirp body");
        }
        Ok(self.store.create_chirp(&cleaned)?)
    }

    /// All chirps, ascending by id.
    pub fn chirps(&self) -> Result<Vec<Chirp>> {
        Ok(self.store.get_chirps()?)
    }

    /// One chirp by id.
    pub fn chirp(&self, id: ChirpId) -> Result<Chirp> {
        Ok(self.store.get_chirp(id)?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Users
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a user (or replace the password of an existing email).
    pub fn register(&self, email: &str, password: &str) -> Result<UserView> {
        Ok(self.store.create_user(email, password)?.into())
    }

    /// Check credentials.
    pub fn login(&self, email: &str, password: &str) -> Result<UserView> {
        Ok(self.store.login(email, password)?.into())
    }
}

impl<S: Store> Clone for Chirpy<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}
