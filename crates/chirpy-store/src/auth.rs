//! Login verification shared by every store.

use chirpy_core::{PasswordHash, PasswordHasher, User};
use tracing::warn;

use crate::error::{Result, StoreError};

/// Verify `password` against `user`, costing one hash verification whether
/// or not the user exists.
pub(crate) fn authenticate(
    hasher: &PasswordHasher,
    user: Option<User>,
    password: &str,
) -> Result<User> {
    let empty = PasswordHash::empty();
    let hash = user.as_ref().map_or(&empty, |u| &u.password_hash);
    let verified = hasher.verify(password, hash);
    match user {
        Some(user) if verified => Ok(user),
        _ => {
            warn!("login rejected");
            Err(StoreError::Auth)
        }
    }
}
