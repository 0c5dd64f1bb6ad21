//! Golden test vectors for the snapshot file format.
//!
//! Each vector builds a snapshot from fixed inputs and pins the exact bytes
//! the codec must produce for it. A change here is a file format change.

use chirpy_core::{codec, PasswordHash, Snapshot};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Chirp bodies, inserted in order.
    pub chirps: &'static [&'static str],
    /// `(email, hash bytes)` pairs, upserted in order after the chirps.
    pub users: &'static [(&'static str, &'static [u8])],
    /// Expected compact encoding.
    pub expected_json: &'static str,
}

impl GoldenVector {
    /// Build the snapshot this vector describes.
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::empty();
        for body in self.chirps {
            snapshot.insert_chirp(*body);
        }
        for (email, hash) in self.users {
            snapshot.upsert_user(*email, PasswordHash::from_bytes(hash.to_vec()));
        }
        snapshot
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty snapshot",
            chirps: &[],
            users: &[],
            expected_json: r#"{"chirps":{},"users":{}}"#,
        },
        GoldenVector {
            name: "one chirp",
            chirps: &["hello world"],
            users: &[],
            expected_json: r#"{"chirps":{"1":{"id":1,"body":"hello world"}},"users":{}}"#,
        },
        GoldenVector {
            name: "chirp keys in numeric order",
            chirps: &["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"],
            users: &[],
            expected_json: concat!(
                r#"{"chirps":{"1":{"id":1,"body":"a"},"2":{"id":2,"body":"b"},"#,
                r#""3":{"id":3,"body":"c"},"4":{"id":4,"body":"d"},"#,
                r#""5":{"id":5,"body":"e"},"6":{"id":6,"body":"f"},"#,
                r#""7":{"id":7,"body":"g"},"8":{"id":8,"body":"h"},"#,
                r#""9":{"id":9,"body":"i"},"10":{"id":10,"body":"j"}},"users":{}}"#
            ),
        },
        GoldenVector {
            name: "escaped and non-ascii body",
            chirps: &["say \"hi\" \u{2713}\n"],
            users: &[],
            expected_json: "{\"chirps\":{\"1\":{\"id\":1,\"body\":\"say \\\"hi\\\" \u{2713}\\n\"}},\"users\":{}}",
        },
        GoldenVector {
            name: "users sorted by email",
            chirps: &[],
            users: &[("b@x.com", b"hash-b"), ("a@x.com", b"hash-a")],
            expected_json: concat!(
                r#"{"chirps":{},"users":{"#,
                r#""a@x.com":{"id":2,"email":"a@x.com","password":"aGFzaC1h"},"#,
                r#""b@x.com":{"id":1,"email":"b@x.com","password":"aGFzaC1i"}}}"#
            ),
        },
        GoldenVector {
            name: "overwrite keeps id",
            chirps: &["first"],
            users: &[("a@x.com", b"hash-a"), ("a@x.com", b"hash-b")],
            expected_json: concat!(
                r#"{"chirps":{"1":{"id":1,"body":"first"}},"users":{"#,
                r#""a@x.com":{"id":1,"email":"a@x.com","password":"aGFzaC1i"}}}"#
            ),
        },
        GoldenVector {
            name: "empty password hash",
            chirps: &[],
            users: &[("a@x.com", b"")],
            expected_json: r#"{"chirps":{},"users":{"a@x.com":{"id":1,"email":"a@x.com","password":""}}}"#,
        },
    ]
}

/// Encode every vector and compare against its expected bytes.
///
/// Returns `(name, matches, actual)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let actual = codec::encode(&v.snapshot())
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .unwrap_or_else(|e| format!("<encode failed: {}>", e));
            (v.name.to_string(), actual == v.expected_json, actual)
        })
        .collect()
}
