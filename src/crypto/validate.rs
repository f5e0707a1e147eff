//! Hash format checks

use super::hash::SHA256_LEN;

/// Checks that `s` looks like a hex-encoded digest of `digest_len` bytes.
/// Either letter case is accepted.
pub fn is_valid_hex_digest(s: &str, digest_len: usize) -> bool {
    digest_len.checked_mul(2) == Some(s.len()) && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Checks that `s` is a 64-character hex string, i.e. a SHA-256 sized hash.
///
/// 40-character RIPEMD-160 / Hash160 strings are rejected; use
/// [`is_valid_hex_digest`] with a length of 20 for those.
pub fn is_valid_hash_hex(s: &str) -> bool {
    is_valid_hex_digest(s, SHA256_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::{hash160_hex, sha256_hex};

    #[test]
    fn test_accepts_sha256_output() {
        for input in [&b""[..], &b"Hello, Ethereum!"[..], &[0u8; 1000][..]] {
            assert!(is_valid_hash_hex(&sha256_hex(input)));
        }
        assert!(is_valid_hash_hex(&sha256_hex(b"abc").to_uppercase()));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(!is_valid_hash_hex(""));
        assert!(!is_valid_hash_hex(&format!("zz{}", "0".repeat(62))));
        assert!(!is_valid_hash_hex(&"a".repeat(63)));
        assert!(!is_valid_hash_hex(&"a".repeat(65)));
        assert!(!is_valid_hash_hex(&format!("0x{}", "0".repeat(62))));
        // Multi-byte chars must not slip through on byte length
        assert!(!is_valid_hash_hex(&format!("é{}", "0".repeat(62))));
    }

    #[test]
    fn test_huge_digest_len_is_rejected() {
        assert!(!is_valid_hex_digest("abcd", usize::MAX));
        assert!(!is_valid_hex_digest("", usize::MAX / 2 + 1));
        assert!(is_valid_hex_digest("", 0));
    }

    #[test]
    fn test_hash160_length() {
        let h = hash160_hex(b"Hello, Ethereum!");
        assert!(!is_valid_hash_hex(&h));
        assert!(is_valid_hex_digest(&h, 20));
    }
}
