//! Snapshot codec: the whole state to and from one JSON document.
//!
//! The encoding is deterministic. Both collections are ordered maps, so the
//! same snapshot always produces identical bytes:
//!
//! ```text
//! {"chirps":{"1":{"id":1,"body":"hello"}},
//!  "users":{"a@x.com":{"id":1,"email":"a@x.com","password":"<base64>"}}}
//! ```
//!
//! Empty collections encode as `{}` and are never omitted. Decoding is strict:
//! a truncated or otherwise partial document is an error, never an empty
//! snapshot.

use crate::error::FormatError;
use crate::snapshot::Snapshot;

/// Encode a snapshot as compact JSON.
pub fn encode(snapshot: &Snapshot) -> Result<Vec<u8>, FormatError> {
    Ok(serde_json::to_vec(snapshot)?)
}

/// Encode a snapshot as indented JSON, for inspection.
pub fn encode_pretty(snapshot: &Snapshot) -> Result<Vec<u8>, FormatError> {
    Ok(serde_json::to_vec_pretty(snapshot)?)
}

/// Decode and validate a snapshot.
///
/// Rejects empty input, malformed or truncated JSON, trailing data, missing
/// or `null` collections, unknown fields, repeated keys within a collection,
/// and snapshots whose ids or keys are inconsistent.
pub fn decode(bytes: &[u8]) -> Result<Snapshot, FormatError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(FormatError::Empty);
    }
    let snapshot: Snapshot = serde_json::from_slice(bytes)?;
    snapshot.check_consistency()?;
    Ok(snapshot)
}
