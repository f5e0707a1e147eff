//! secp-hashkit: hashing and secp256k1 key utilities
//!
//! This crate provides:
//! - Lowercase hex encoding
//! - SHA-256, double SHA-256, RIPEMD-160 and Hash160 digests
//! - secp256k1 key pairs whose secret is zeroed on drop
//! - SHA-256 hash format validation
//!
//! # Example
//!
//! ```rust
//! use secp_hashkit::crypto::{hash160_hex, is_valid_hash_hex, sha256_hex, KeyPair};
//!
//! let message = b"Hello, Ethereum!";
//! let hash = sha256_hex(message);
//! assert!(is_valid_hash_hex(&hash));
//! assert_eq!(hash160_hex(message).len(), 40);
//!
//! let key_pair = KeyPair::generate().unwrap();
//! println!("Public key: {}", key_pair.public_key_hex());
//! ```

pub mod cli;
pub mod crypto;

// Re-export commonly used types
pub use crypto::{HashAlgorithm, KeyError, KeyPair};
