//! Cryptographic utilities
//!
//! This module provides:
//! - Hex encoding
//! - SHA-256, double SHA-256, RIPEMD-160, Hash160 and Keccak-256 hashing
//! - ECDSA key management, signing and public key recovery (secp256k1)
//! - Hash format validation

pub mod encoding;
pub mod hash;
pub mod keys;
pub mod validate;

pub use encoding::{from_hex, to_hex, FromHexError};
pub use hash::{
    digest, digest_hex, double_sha256, double_sha256_hex, hash160, hash160_hex, keccak256,
    keccak256_hex, ripemd160, ripemd160_hex, sha256, sha256_hex, HashAlgorithm, KECCAK256_LEN,
    RIPEMD160_LEN, SHA256_LEN,
};
pub use keys::{
    public_key_from_hex, public_key_to_address, public_key_to_ethereum_address,
    recover_public_key, verify_signature, KeyError, KeyPair, RECOVERABLE_SIGNATURE_LEN,
    SECRET_KEY_LEN, UNCOMPRESSED_PUBLIC_KEY_LEN,
};
pub use validate::{is_valid_hash_hex, is_valid_hex_digest};
