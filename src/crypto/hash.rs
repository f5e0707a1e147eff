//! Cryptographic hashing utilities
//!
//! SHA-256, double SHA-256, RIPEMD-160, Hash160 and Keccak-256 (the
//! pre-standard SHA-3 variant used by Ethereum), each available as raw
//! digest bytes and as a lowercase hex string. The compositions always feed
//! the raw intermediate digest into the second pass, never its hex text.

use std::fmt;
use std::str::FromStr;

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use sha3::Keccak256;

use super::encoding::to_hex;

/// Length of a SHA-256 digest in bytes
pub const SHA256_LEN: usize = 32;

/// Length of a RIPEMD-160 / Hash160 digest in bytes
pub const RIPEMD160_LEN: usize = 20;

/// Length of a Keccak-256 digest in bytes
pub const KECCAK256_LEN: usize = 32;

/// Runs a single pass of any digest provider over the input
pub fn digest<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}

/// Runs a single pass of any digest provider and hex-encodes the result
pub fn digest_hex<D: Digest>(data: &[u8]) -> String {
    to_hex(D::digest(data))
}

/// Computes SHA-256 hash of the input data
pub fn sha256(data: &[u8]) -> [u8; SHA256_LEN] {
    Sha256::digest(data).into()
}

/// Computes double SHA-256 hash (SHA-256 of SHA-256)
/// Used for block hashes in Bitcoin-style blockchains
pub fn double_sha256(data: &[u8]) -> [u8; SHA256_LEN] {
    sha256(&sha256(data))
}

/// Computes RIPEMD-160 hash of the input data
pub fn ripemd160(data: &[u8]) -> [u8; RIPEMD160_LEN] {
    Ripemd160::digest(data).into()
}

/// Computes Hash160 (RIPEMD-160 of the raw SHA-256 digest)
pub fn hash160(data: &[u8]) -> [u8; RIPEMD160_LEN] {
    ripemd160(&sha256(data))
}

/// Computes Keccak-256 hash (Ethereum flavour, not NIST SHA3-256)
pub fn keccak256(data: &[u8]) -> [u8; KECCAK256_LEN] {
    Keccak256::digest(data).into()
}

/// Computes SHA-256 hash and returns it as a hex string
pub fn sha256_hex(data: &[u8]) -> String {
    digest_hex::<Sha256>(data)
}

/// Computes double SHA-256 hash and returns it as a hex string
pub fn double_sha256_hex(data: &[u8]) -> String {
    to_hex(double_sha256(data))
}

/// Computes RIPEMD-160 hash and returns it as a hex string
pub fn ripemd160_hex(data: &[u8]) -> String {
    digest_hex::<Ripemd160>(data)
}

/// Computes Hash160 and returns it as a hex string
pub fn hash160_hex(data: &[u8]) -> String {
    to_hex(hash160(data))
}

/// Computes Keccak-256 hash and returns it as a hex string
pub fn keccak256_hex(data: &[u8]) -> String {
    digest_hex::<Keccak256>(data)
}

/// The hash constructions offered by this module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    DoubleSha256,
    Ripemd160,
    Hash160,
    Keccak256,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 5] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::DoubleSha256,
        HashAlgorithm::Ripemd160,
        HashAlgorithm::Hash160,
        HashAlgorithm::Keccak256,
    ];

    /// Canonical lowercase name, accepted back by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::DoubleSha256 => "double-sha256",
            HashAlgorithm::Ripemd160 => "ripemd160",
            HashAlgorithm::Hash160 => "hash160",
            HashAlgorithm::Keccak256 => "keccak256",
        }
    }

    /// Digest length in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 | HashAlgorithm::DoubleSha256 => SHA256_LEN,
            HashAlgorithm::Ripemd160 | HashAlgorithm::Hash160 => RIPEMD160_LEN,
            HashAlgorithm::Keccak256 => KECCAK256_LEN,
        }
    }

    /// Hashes the input and returns the raw digest
    pub fn hash(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha256 => sha256(data).to_vec(),
            HashAlgorithm::DoubleSha256 => double_sha256(data).to_vec(),
            HashAlgorithm::Ripemd160 => ripemd160(data).to_vec(),
            HashAlgorithm::Hash160 => hash160(data).to_vec(),
            HashAlgorithm::Keccak256 => keccak256(data).to_vec(),
        }
    }

    /// Hashes the input and returns the digest as a hex string
    pub fn hash_hex(&self, data: &[u8]) -> String {
        to_hex(self.hash(data))
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "double-sha256" | "sha256d" => Ok(HashAlgorithm::DoubleSha256),
            "ripemd160" | "ripemd-160" => Ok(HashAlgorithm::Ripemd160),
            "hash160" => Ok(HashAlgorithm::Hash160),
            "keccak256" | "keccak-256" => Ok(HashAlgorithm::Keccak256),
            other => Err(format!("Unknown hash algorithm: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGE: &[u8] = b"Hello, Ethereum!";

    #[test]
    fn test_sha256() {
        let data = b"hello world";
        let hash = sha256(data);
        assert_eq!(hash.len(), 32);
        assert_eq!(
            sha256_hex(data),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_empty_input_vectors() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(ripemd160_hex(b""), "9c1185a5c5e9fc54612808977ee8f548b2258d31");
        assert_eq!(hash160_hex(b""), "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb");
    }

    #[test]
    fn test_message_golden_values() {
        assert_eq!(
            sha256_hex(MESSAGE),
            "055046fb9ba0b1502c4f01a9bab9de9ee90b74a5289e183dba81f4edc7a134b2"
        );
        assert_eq!(
            double_sha256_hex(MESSAGE),
            "bbf33bd3605d0024ff5fe48bcac9b4657b46cd91331a863a4eb893150e392954"
        );
        assert_eq!(
            ripemd160_hex(MESSAGE),
            "b9d79aa76a2d38e3a62bad92a352c2c0e3256630"
        );
        assert_eq!(hash160_hex(MESSAGE), "64f4aab9b1625837b1cdbfbf13b5552daf4d73e3");
        // Deterministic across calls
        assert_eq!(sha256_hex(MESSAGE), sha256_hex(MESSAGE));
    }

    #[test]
    fn test_double_sha256_consumes_raw_digest() {
        for input in [&b""[..], &b"hello world"[..], MESSAGE] {
            let first = sha256(input);
            assert_eq!(double_sha256_hex(input), sha256_hex(&first));
            // Hashing the hex text instead gives something else
            assert_ne!(
                double_sha256_hex(input),
                sha256_hex(sha256_hex(input).as_bytes())
            );
        }
    }

    #[test]
    fn test_hash160_consumes_raw_digest() {
        for input in [&b""[..], &b"hello world"[..], MESSAGE] {
            let first = sha256(input);
            assert_eq!(hash160_hex(input), ripemd160_hex(&first));
            assert_ne!(
                hash160_hex(input),
                ripemd160_hex(sha256_hex(input).as_bytes())
            );
        }
    }

    #[test]
    fn test_keccak256_vectors() {
        assert_eq!(
            keccak256_hex(b""),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            keccak256_hex(b"hello world"),
            "47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fad"
        );
        assert_eq!(
            keccak256_hex(MESSAGE),
            "0a1e2723bd7f1996832b7ed7406df8ad975deba1aa04020b5bfc3e6fe70ecc29"
        );
        // Keccak padding differs from NIST SHA3-256
        assert_ne!(
            keccak256_hex(b""),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn test_generic_digest_matches_named() {
        assert_eq!(digest::<Sha256>(MESSAGE), sha256(MESSAGE).to_vec());
        assert_eq!(digest_hex::<Ripemd160>(MESSAGE), ripemd160_hex(MESSAGE));
    }

    #[test]
    fn test_algorithm_dispatch() {
        for algorithm in HashAlgorithm::ALL {
            let hex = algorithm.hash_hex(MESSAGE);
            assert_eq!(hex.len(), algorithm.digest_len() * 2);
            assert_eq!(algorithm.name().parse::<HashAlgorithm>().unwrap(), algorithm);
        }
        assert_eq!(HashAlgorithm::Hash160.hash_hex(MESSAGE), hash160_hex(MESSAGE));
        assert_eq!(
            "SHA256D".parse::<HashAlgorithm>().unwrap(),
            HashAlgorithm::DoubleSha256
        );
        assert_eq!(
            "Keccak-256".parse::<HashAlgorithm>().unwrap(),
            HashAlgorithm::Keccak256
        );
        assert_eq!(HashAlgorithm::Keccak256.hash_hex(b""), keccak256_hex(b""));
        assert!("md5".parse::<HashAlgorithm>().is_err());
    }
}
