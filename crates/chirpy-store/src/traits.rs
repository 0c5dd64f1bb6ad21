//! Store trait: the interface the application layer programs against.
//!
//! Implementations include the single-file [`FileStore`](crate::FileStore)
//! and the in-memory [`MemoryStore`](crate::MemoryStore) for tests.

use chirpy_core::{Chirp, ChirpId, Snapshot, User};

use crate::error::Result;

/// Create/read access to chirps and users.
///
/// Every call is a blocking, self-contained unit of work. Nothing is atomic
/// across two calls: a read followed by a create can race with another
/// caller's create.
pub trait Store: Send + Sync {
    /// Append a chirp. Its id is one greater than the current chirp count.
    ///
    /// The body is stored as given; validation is the caller's job.
    fn create_chirp(&self, body: &str) -> Result<Chirp>;

    /// All chirps, ascending by id. Empty when there are none.
    fn get_chirps(&self) -> Result<Vec<Chirp>>;

    /// One chirp by id.
    ///
    /// Returns `NotFound` for any id outside `[1, count]`.
    fn get_chirp(&self, id: ChirpId) -> Result<Chirp>;

    /// Create a user, or overwrite the user with the same email.
    ///
    /// The password is hashed before storage.
    fn create_user(&self, email: &str, password: &str) -> Result<User>;

    /// Check a login attempt.
    ///
    /// Returns `Auth` for an unknown email and for a wrong password alike.
    fn login(&self, email: &str, password: &str) -> Result<User>;

    /// The full current state.
    fn snapshot(&self) -> Result<Snapshot>;
}
