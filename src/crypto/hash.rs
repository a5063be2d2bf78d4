//! SHA-256 hashing implementation
//!
//! All digesting in nanochain uses SHA-256, rendered as lowercase hex.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Hash arbitrary bytes and render the digest as a lowercase hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Serialize a value to canonical JSON: compact, with object keys in
/// lexicographic order at every nesting level.
///
/// serde_json's `Value` objects are BTreeMap-backed, so round-tripping
/// through `to_value` sorts keys. Digests computed over this form do not
/// depend on field declaration or representation order.
pub fn canonical_json<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .expect("value serializes to JSON")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vectors() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex(b"hello world"),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_sha256_deterministic() {
        assert_eq!(sha256_hex(b"nanochain"), sha256_hex(b"nanochain"));
    }

    #[test]
    fn test_sha256_different_inputs() {
        assert_ne!(sha256_hex(b"hello"), sha256_hex(b"world"));
    }

    #[test]
    fn test_canonical_json_sorts_keys() {
        #[derive(Serialize)]
        struct Sample {
            zulu: u32,
            alpha: u32,
        }

        let json = canonical_json(&Sample { zulu: 1, alpha: 2 });
        assert_eq!(json, r#"{"alpha":2,"zulu":1}"#);
    }
}
