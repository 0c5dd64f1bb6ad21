//! Proptest generators for property-based testing.

use proptest::prelude::*;

use chirpy_core::{ChirpId, PasswordHash, Snapshot, UserId, MAX_CHIRP_LENGTH};

/// Generate a chirp body of at most `MAX_CHIRP_LENGTH` characters.
pub fn chirp_body() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..=MAX_CHIRP_LENGTH)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generate a body that is too long to post.
pub fn long_body() -> impl Strategy<Value = String> {
    (MAX_CHIRP_LENGTH + 1..=MAX_CHIRP_LENGTH * 3).prop_map(|len| "x".repeat(len))
}

/// Generate a plausible email address.
pub fn email() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9.]{0,15}@[a-z]{1,10}\\.(com|org|net)".prop_map(String::from)
}

/// Generate opaque hash bytes. Not a real PHC string.
pub fn password_hash() -> impl Strategy<Value = PasswordHash> {
    prop::collection::vec(any::<u8>(), 0..=96).prop_map(PasswordHash::from_bytes)
}

/// Parameters for building a snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotParams {
    pub bodies: Vec<String>,
    pub users: Vec<(String, PasswordHash)>,
}

impl SnapshotParams {
    /// Build the snapshot by inserting chirps then users in order.
    pub fn build(&self) -> Snapshot {
        let mut snapshot = Snapshot::empty();
        for body in &self.bodies {
            snapshot.insert_chirp(body.as_str());
        }
        for (email, hash) in &self.users {
            snapshot.upsert_user(email.as_str(), hash.clone());
        }
        snapshot
    }
}

/// Generate snapshot parameters with up to `max_chirps` chirps and
/// `max_users` distinct users.
pub fn snapshot_params(max_chirps: usize, max_users: usize) -> impl Strategy<Value = SnapshotParams> {
    (
        prop::collection::vec(chirp_body(), 0..=max_chirps),
        prop::collection::btree_map(email(), password_hash(), 0..=max_users),
    )
        .prop_map(|(bodies, users)| SnapshotParams {
            bodies,
            users: users.into_iter().collect(),
        })
}

/// Generate a consistent snapshot.
pub fn snapshot(max_chirps: usize, max_users: usize) -> impl Strategy<Value = Snapshot> {
    snapshot_params(max_chirps, max_users).prop_map(|params| params.build())
}

impl Arbitrary for SnapshotParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        snapshot_params(32, 8).boxed()
    }
}

/// Ids `1..=n` as chirp ids, for comparing against store output.
pub fn chirp_ids(n: usize) -> Vec<ChirpId> {
    (1..=n as u64).map(ChirpId).collect()
}

/// Ids `1..=n` as user ids.
pub fn user_ids(n: usize) -> Vec<UserId> {
    (1..=n as u64).map(UserId).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirpy_core::{codec, validate_chirp};

    proptest! {
        #[test]
        fn test_generated_snapshot_is_consistent(params: SnapshotParams) {
            let snapshot = params.build();
            prop_assert!(snapshot.check_consistency().is_ok());
            prop_assert_eq!(snapshot.chirp_count(), params.bodies.len());
            prop_assert_eq!(snapshot.user_count(), params.users.len());
        }

        #[test]
        fn test_encoding_deterministic(params: SnapshotParams) {
            let b1 = codec::encode(&params.build()).unwrap();
            let b2 = codec::encode(&params.build()).unwrap();
            prop_assert_eq!(b1, b2);
        }

        #[test]
        fn test_chirp_ids_dense(s in snapshot(40, 0)) {
            let ids: Vec<ChirpId> = s.chirps_sorted().iter().map(|c| c.id).collect();
            prop_assert_eq!(ids, chirp_ids(s.chirp_count()));
        }

        #[test]
        fn test_generated_bodies_are_valid(body in chirp_body()) {
            prop_assert!(validate_chirp(&body, MAX_CHIRP_LENGTH).is_ok());
        }

        #[test]
        fn test_long_bodies_are_invalid(body in long_body()) {
            prop_assert!(validate_chirp(&body, MAX_CHIRP_LENGTH).is_err());
        }
    }
}
