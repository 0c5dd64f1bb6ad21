//! Password hashing with Argon2id.
//!
//! Hashes are PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`)
//! stored as raw bytes in [`PasswordHash`]. Each hash carries its own salt and
//! parameters, so hashes made under older settings still verify after the
//! configured work factor is raised.
//!
//! The work factor is configuration. [`HashParams::MINIMUM`] is the lowest
//! setting accepted: 19 MiB of memory, 2 passes, 1 lane.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash as PhcString, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::error::PasswordError;
use crate::types::PasswordHash;

/// Secret hashed once per hasher, at construction, to build the decoy used
/// for unknown users.
const DECOY_SECRET: &[u8] = b"chirpy decoy password";

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes over memory.
    pub iterations: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl HashParams {
    /// Lowest accepted parameters.
    pub const MINIMUM: Self = Self {
        memory_kib: 19 * 1024,
        iterations: 2,
        parallelism: 1,
    };

    pub const fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        Self {
            memory_kib,
            iterations,
            parallelism,
        }
    }

    /// Reject parameters weaker than [`HashParams::MINIMUM`].
    pub fn validate(&self) -> Result<(), PasswordError> {
        let min = Self::MINIMUM;
        if self.memory_kib < min.memory_kib {
            return Err(PasswordError::WeakParams(format!(
                "memory_kib {} < {}",
                self.memory_kib, min.memory_kib
            )));
        }
        if self.iterations < min.iterations {
            return Err(PasswordError::WeakParams(format!(
                "iterations {} < {}",
                self.iterations, min.iterations
            )));
        }
        if self.parallelism < min.parallelism {
            return Err(PasswordError::WeakParams(format!(
                "parallelism {} < {}",
                self.parallelism, min.parallelism
            )));
        }
        Ok(())
    }

    fn to_argon2(self) -> Result<Params, PasswordError> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| PasswordError::InvalidParams(e.to_string()))
    }
}

impl Default for HashParams {
    fn default() -> Self {
        Self::MINIMUM
    }
}

/// Hashes and verifies passwords.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: HashParams,
    argon2_params: Params,
    /// PHC string of [`DECOY_SECRET`] under these parameters.
    decoy: String,
}

impl PasswordHasher {
    /// Create a hasher, validating `params` against the minimum.
    ///
    /// Also hashes the decoy, so this costs one full hash.
    pub fn new(params: HashParams) -> Result<Self, PasswordError> {
        params.validate()?;
        let argon2_params = params.to_argon2()?;
        let mut hasher = Self {
            params,
            argon2_params,
            decoy: String::new(),
        };
        hasher.decoy = hasher.hash_phc(DECOY_SECRET)?;
        Ok(hasher)
    }

    pub fn params(&self) -> HashParams {
        self.params
    }

    fn engine(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.argon2_params.clone())
    }

    /// Hash `password` with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<PasswordHash, PasswordError> {
        let phc = self.hash_phc(password.as_bytes())?;
        Ok(PasswordHash::from_bytes(phc.into_bytes()))
    }

    fn hash_phc(&self, password: &[u8]) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        self.engine()
            .hash_password(password, &salt)
            .map(|phc| phc.to_string())
            .map_err(|e| PasswordError::Hashing(e.to_string()))
    }

    /// Check `password` against `hash`.
    ///
    /// An empty or unparseable hash is never a match, but still costs one
    /// full verification against a decoy hash so that callers cannot tell a
    /// missing account from a wrong password by timing.
    pub fn verify(&self, password: &str, hash: &PasswordHash) -> bool {
        let parsed = std::str::from_utf8(hash.as_bytes())
            .ok()
            .and_then(|s| PhcString::new(s).ok());

        match parsed {
            Some(phc) => self
                .engine()
                .verify_password(password.as_bytes(), &phc)
                .is_ok(),
            None => {
                self.verify_decoy(password);
                false
            }
        }
    }

    fn verify_decoy(&self, password: &str) {
        if let Ok(phc) = PhcString::new(&self.decoy) {
            let _ = self.engine().verify_password(password.as_bytes(), &phc);
        }
    }
}
