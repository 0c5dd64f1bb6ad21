//! The snapshot aggregate: every chirp and every user.
//!
//! A snapshot is the unit of persistence. Stores load a whole snapshot,
//! apply one mutation through the methods here, and write the whole thing
//! back. Both collections are ordered maps, so iteration order is id order
//! for chirps and email order for users.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FormatError;
use crate::types::{Chirp, ChirpId, PasswordHash, User, UserId};

/// The complete persisted state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    #[serde(deserialize_with = "unique_keys")]
    pub chirps: BTreeMap<ChirpId, Chirp>,
    #[serde(deserialize_with = "unique_keys")]
    pub users: BTreeMap<String, User>,
}

impl Snapshot {
    /// A snapshot with no chirps and no users.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a chirp. Its id is one greater than the current chirp count.
    pub fn insert_chirp(&mut self, body: impl Into<String>) -> Chirp {
        let id = ChirpId(self.chirps.len() as u64 + 1);
        let chirp = Chirp {
            id,
            body: body.into(),
        };
        self.chirps.insert(id, chirp.clone());
        chirp
    }

    /// All chirps, ascending by id.
    pub fn chirps_sorted(&self) -> Vec<Chirp> {
        self.chirps.values().cloned().collect()
    }

    /// Look up a chirp by id.
    ///
    /// Only ids in `[1, chirp_count()]` resolve.
    pub fn chirp(&self, id: ChirpId) -> Option<&Chirp> {
        if id.0 == 0 || id.0 > self.chirps.len() as u64 {
            return None;
        }
        self.chirps.get(&id)
    }

    /// Insert or overwrite the user keyed by `email`.
    ///
    /// A new email gets one more than the highest user id in use, which is
    /// `user_count() + 1` while ids have no gaps. An existing email keeps its
    /// id and has its hash replaced.
    pub fn upsert_user(&mut self, email: impl Into<String>, password_hash: PasswordHash) -> User {
        let email = email.into();
        let id = match self.users.get(&email) {
            Some(existing) => existing.id,
            None => self.next_user_id(),
        };
        let user = User {
            id,
            email: email.clone(),
            password_hash,
        };
        self.users.insert(email, user.clone());
        user
    }

    fn next_user_id(&self) -> UserId {
        self.users
            .values()
            .map(|u| u.id)
            .max()
            .map_or(UserId::FIRST, UserId::next)
    }

    /// Look up a user by email.
    pub fn user(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    pub fn chirp_count(&self) -> usize {
        self.chirps.len()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chirps.is_empty() && self.users.is_empty()
    }

    /// Check the invariants every store relies on.
    ///
    /// - each chirp is keyed by its own id, and chirp ids are exactly `1..=N`
    /// - each user is keyed by its own email, and user ids are positive and
    ///   unique (gaps are allowed)
    pub fn check_consistency(&self) -> Result<(), FormatError> {
        for (expected, (key, chirp)) in (1u64..).zip(&self.chirps) {
            if chirp.id != *key {
                return Err(FormatError::Inconsistent(format!(
                    "chirp keyed {} has id {}",
                    key, chirp.id
                )));
            }
            if key.0 != expected {
                return Err(FormatError::Inconsistent(format!(
                    "chirp ids are not contiguous: expected {}, found {}",
                    expected, key
                )));
            }
        }

        let mut seen = BTreeSet::new();
        for (email, user) in &self.users {
            if user.email != *email {
                return Err(FormatError::Inconsistent(format!(
                    "user keyed {:?} has email {:?}",
                    email, user.email
                )));
            }
            if user.id.0 == 0 {
                return Err(FormatError::Inconsistent(format!(
                    "user {:?} has id 0",
                    email
                )));
            }
            if !seen.insert(user.id) {
                return Err(FormatError::Inconsistent(format!(
                    "duplicate user id {}",
                    user.id
                )));
            }
        }

        Ok(())
    }
}

/// Deserialize a map, failing on a repeated key instead of keeping the last.
fn unique_keys<'de, D, K, V>(deserializer: D) -> Result<BTreeMap<K, V>, D::Error>
where
    D: Deserializer<'de>,
    K: Deserialize<'de> + Ord + fmt::Display,
    V: Deserialize<'de>,
{
    struct UniqueKeys<K, V>(PhantomData<(K, V)>);

    impl<'de, K, V> Visitor<'de> for UniqueKeys<K, V>
    where
        K: Deserialize<'de> + Ord + fmt::Display,
        V: Deserialize<'de>,
    {
        type Value = BTreeMap<K, V>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map with unique keys")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut map = BTreeMap::new();
            while let Some((key, value)) = access.next_entry::<K, V>()? {
                if map.contains_key(&key) {
                    return Err(de::Error::custom(format!("duplicate key {}", key)));
                }
                map.insert(key, value);
            }
            Ok(map)
        }
    }

    deserializer.deserialize_map(UniqueKeys(PhantomData))
}
