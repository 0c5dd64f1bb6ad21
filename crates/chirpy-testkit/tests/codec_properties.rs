//! Property tests for the snapshot codec and the file store.

use proptest::prelude::*;

use chirpy_core::codec;
use chirpy_store::Store;
use chirpy_testkit::fixtures::TestFixture;
use chirpy_testkit::generators::{chirp_body, chirp_ids, snapshot};

proptest! {
    #[test]
    fn decode_inverts_encode(s in snapshot(24, 6)) {
        let bytes = codec::encode(&s).unwrap();
        prop_assert_eq!(codec::decode(&bytes).unwrap(), s);
    }

    #[test]
    fn pretty_and_compact_agree(s in snapshot(8, 4)) {
        let pretty = codec::encode_pretty(&s).unwrap();
        prop_assert_eq!(codec::decode(&pretty).unwrap(), s);
    }

    #[test]
    fn truncated_encoding_is_rejected(s in snapshot(8, 4), frac in 0.0f64..1.0) {
        let bytes = codec::encode(&s).unwrap();
        let cut = ((bytes.len() as f64) * frac) as usize;
        prop_assert!(codec::decode(&bytes[..cut]).is_err());
    }

    #[test]
    fn reencoding_is_stable(s in snapshot(16, 4)) {
        let first = codec::encode(&s).unwrap();
        let second = codec::encode(&codec::decode(&first).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn file_store_keeps_bodies_in_order(bodies in prop::collection::vec(chirp_body(), 0..12)) {
        let fixture = TestFixture::new();
        for body in &bodies {
            fixture.store.create_chirp(body).unwrap();
        }

        let stored = fixture.reopen().get_chirps().unwrap();
        let ids: Vec<_> = stored.iter().map(|c| c.id).collect();
        let texts: Vec<_> = stored.into_iter().map(|c| c.body).collect();
        prop_assert_eq!(ids, chirp_ids(bodies.len()));
        prop_assert_eq!(texts, bodies.clone());

        let on_disk = codec::decode(&fixture.raw()).unwrap();
        prop_assert_eq!(on_disk.chirp_count(), bodies.len());
    }
}
