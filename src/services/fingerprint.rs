//! Content fingerprinting used as the deduplication identity.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `data`. Defined for empty input.
pub fn fingerprint(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_digest_of_empty_input() {
        assert_eq!(
            fingerprint(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn identical_content_shares_fingerprint() {
        assert_eq!(fingerprint(b"This is test data"), fingerprint(b"This is test data"));
        assert_ne!(fingerprint(b"This is test data"), fingerprint(b"Different data"));
    }

    proptest! {
        #[test]
        fn prop_deterministic(data in prop::collection::vec(any::<u8>(), 0..4096)) {
            prop_assert_eq!(fingerprint(&data), fingerprint(&data));
        }

        #[test]
        fn prop_distinct_inputs_differ(
            a in prop::collection::vec(any::<u8>(), 0..512),
            b in prop::collection::vec(any::<u8>(), 0..512),
        ) {
            prop_assume!(a != b);
            prop_assert_ne!(fingerprint(&a), fingerprint(&b));
        }
    }
}
