//! ECDSA key management
//!
//! Provides key pair generation, signing, verification and public key
//! recovery using the secp256k1 elliptic curve (same as Bitcoin and
//! Ethereum).
//!
//! A [`KeyPair`] owns its secret scalar exclusively: it is not `Clone`,
//! its `Debug` output is redacted, and the secret bytes are zeroed when
//! the key pair goes out of scope.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId, Signature};
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use thiserror::Error;
use zeroize::{Zeroize, Zeroizing};

use super::encoding::{from_hex, to_hex};
use super::hash::{double_sha256, hash160, keccak256, sha256};

/// Length of a secp256k1 secret key in bytes
pub const SECRET_KEY_LEN: usize = 32;

/// Length of an uncompressed public key (0x04 || X || Y)
pub const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;

/// Length of a recoverable signature (r || s || recovery id)
pub const RECOVERABLE_SIGNATURE_LEN: usize = 65;

/// Offset some encoders (Ethereum `v`) add to the recovery id
const RECOVERY_ID_OFFSET: u8 = 27;

/// Mainnet version byte for pay-to-pubkey-hash addresses
const ADDRESS_VERSION: u8 = 0x00;

/// Out-of-range candidates occur with probability ~2^-128, so hitting this
/// bound means the random source is broken.
const MAX_GENERATION_ATTEMPTS: usize = 8;

/// Errors that can occur during key operations
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),
    #[error("Invalid private key")]
    InvalidPrivateKey,
    #[error("Invalid public key")]
    InvalidPublicKey,
    #[error("Invalid signature")]
    InvalidSignature,
    #[error("Secp256k1 error: {0}")]
    Secp256k1Error(#[from] secp256k1::Error),
}

/// A secp256k1 key pair.
///
/// Holds the raw big-endian secret scalar and the public point derived
/// from it. There is no way to mutate either after construction.
pub struct KeyPair {
    secret: [u8; SECRET_KEY_LEN],
    public_key: PublicKey,
}

impl KeyPair {
    /// Generate a new random key pair from the operating system's CSPRNG
    pub fn generate() -> Result<Self, KeyError> {
        Self::generate_with(&mut OsRng)
    }

    /// Generate a new random key pair from a caller-supplied CSPRNG.
    ///
    /// Candidates outside `[1, n-1]` are redrawn from the same source.
    /// A failing source is reported as [`KeyError::KeyGeneration`] and
    /// never retried.
    pub fn generate_with<R: RngCore + CryptoRng + ?Sized>(
        rng: &mut R,
    ) -> Result<Self, KeyError> {
        let mut candidate = Zeroizing::new([0u8; SECRET_KEY_LEN]);

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            rng.try_fill_bytes(&mut candidate[..])
                .map_err(|e| KeyError::KeyGeneration(format!("random source failed: {}", e)))?;

            match Self::from_secret_bytes(&candidate) {
                Ok(key_pair) => {
                    log::debug!("Generated secp256k1 key pair after {} attempt(s)", attempt);
                    return Ok(key_pair);
                }
                Err(_) => {
                    log::debug!("Rejected out-of-range secret candidate (attempt {})", attempt)
                }
            }
        }

        Err(KeyError::KeyGeneration(format!(
            "no valid secret scalar after {} attempts",
            MAX_GENERATION_ATTEMPTS
        )))
    }

    /// Create a key pair from a 32-byte big-endian secret scalar
    pub fn from_secret_bytes(bytes: &[u8; SECRET_KEY_LEN]) -> Result<Self, KeyError> {
        let mut secret_key =
            SecretKey::from_slice(bytes).map_err(|_| KeyError::InvalidPrivateKey)?;
        let secp = Secp256k1::signing_only();
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);
        secret_key.non_secure_erase();

        Ok(Self {
            secret: *bytes,
            public_key,
        })
    }

    /// Create a key pair from a hex-encoded private key
    pub fn from_private_key_hex(hex_key: &str) -> Result<Self, KeyError> {
        let bytes =
            Zeroizing::new(from_hex(hex_key).map_err(|_| KeyError::InvalidPrivateKey)?);
        if bytes.len() != SECRET_KEY_LEN {
            return Err(KeyError::InvalidPrivateKey);
        }
        let mut secret = Zeroizing::new([0u8; SECRET_KEY_LEN]);
        secret.copy_from_slice(&bytes);

        let key_pair = Self::from_secret_bytes(&secret)?;
        log::debug!("Imported key pair for {}", key_pair.address());
        Ok(key_pair)
    }

    /// Get the private key as a hex string (64 chars, big-endian, zero-padded).
    ///
    /// The returned string is wiped when dropped. Keep it secret!
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(to_hex(&self.secret))
    }

    /// The public point
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Uncompressed public key encoding: 0x04 || X || Y
    pub fn public_key_bytes(&self) -> [u8; UNCOMPRESSED_PUBLIC_KEY_LEN] {
        self.public_key.serialize_uncompressed()
    }

    /// Get the public key as a hex string (uncompressed, 130 chars)
    pub fn public_key_hex(&self) -> String {
        to_hex(self.public_key_bytes())
    }

    /// Get the public key as a hex string (compressed, 66 chars)
    pub fn compressed_public_key_hex(&self) -> String {
        to_hex(self.public_key.serialize())
    }

    /// Generate an address from the public key
    /// Uses Bitcoin-style address generation: Base58Check(RIPEMD160(SHA256(pubkey)))
    pub fn address(&self) -> String {
        public_key_to_address(&self.public_key)
    }

    /// Ethereum address: last 20 bytes of Keccak-256 over X || Y, `0x`-prefixed
    pub fn ethereum_address(&self) -> String {
        public_key_to_ethereum_address(&self.public_key)
    }

    /// Sign a message hash with the private key
    pub fn sign(&self, message_hash: &[u8]) -> Result<Vec<u8>, KeyError> {
        let message = Message::from_digest_slice(&prehash(message_hash))?;
        let mut secret_key = SecretKey::from_slice(&self.secret)?;
        let secp = Secp256k1::signing_only();
        let signature = secp.sign_ecdsa(&message, &secret_key);
        secret_key.non_secure_erase();
        Ok(signature.serialize_compact().to_vec())
    }

    /// Sign a message hash, producing r || s || recovery id (65 bytes)
    pub fn sign_recoverable(&self, message_hash: &[u8]) -> Result<Vec<u8>, KeyError> {
        let message = Message::from_digest_slice(&prehash(message_hash))?;
        let mut secret_key = SecretKey::from_slice(&self.secret)?;
        let secp = Secp256k1::signing_only();
        let signature = secp.sign_ecdsa_recoverable(&message, &secret_key);
        secret_key.non_secure_erase();

        let (recovery_id, compact) = signature.serialize_compact();
        let mut bytes = compact.to_vec();
        bytes.push(recovery_id.to_i32() as u8);
        Ok(bytes)
    }

    /// Verify a signature against this key pair's public key
    pub fn verify(&self, message_hash: &[u8], signature: &[u8]) -> Result<bool, KeyError> {
        verify_signature(&self.public_key, message_hash, signature)
    }
}

impl KeyPair {
    fn wipe(&mut self) {
        self.secret.zeroize();
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("secret", &"[REDACTED]")
            .field("public_key", &self.public_key_hex())
            .finish()
    }
}

/// Message hashes that are not already 32 bytes are hashed with SHA-256 first
fn prehash(message_hash: &[u8]) -> [u8; 32] {
    <[u8; 32]>::try_from(message_hash).unwrap_or_else(|_| sha256(message_hash))
}

/// Convert a public key to a Base58Check address over its compressed encoding
pub fn public_key_to_address(public_key: &PublicKey) -> String {
    let mut address_bytes = vec![ADDRESS_VERSION];
    address_bytes.extend_from_slice(&hash160(&public_key.serialize()));

    // First 4 bytes of double SHA-256
    let checksum = double_sha256(&address_bytes);
    address_bytes.extend_from_slice(&checksum[..4]);

    bs58::encode(address_bytes).into_string()
}

/// Convert a public key to a `0x`-prefixed Ethereum address
pub fn public_key_to_ethereum_address(public_key: &PublicKey) -> String {
    let uncompressed = public_key.serialize_uncompressed();
    let key_hash = keccak256(&uncompressed[1..]);
    format!("0x{}", to_hex(&key_hash[12..]))
}

/// Parse a public key (compressed or uncompressed) from hex string
pub fn public_key_from_hex(hex_key: &str) -> Result<PublicKey, KeyError> {
    let bytes = from_hex(hex_key).map_err(|_| KeyError::InvalidPublicKey)?;
    PublicKey::from_slice(&bytes).map_err(|_| KeyError::InvalidPublicKey)
}

/// Verify a compact signature against a public key
pub fn verify_signature(
    public_key: &PublicKey,
    message_hash: &[u8],
    signature: &[u8],
) -> Result<bool, KeyError> {
    let secp = Secp256k1::verification_only();
    let message = Message::from_digest_slice(&prehash(message_hash))?;
    let sig = Signature::from_compact(signature).map_err(|_| KeyError::InvalidSignature)?;

    Ok(secp.verify_ecdsa(&message, &sig, public_key).is_ok())
}

/// Recover the signing public key from a 65-byte recoverable signature.
///
/// The last byte is the recovery id, either raw (0-3) or offset by 27.
pub fn recover_public_key(message_hash: &[u8], signature: &[u8]) -> Result<PublicKey, KeyError> {
    if signature.len() != RECOVERABLE_SIGNATURE_LEN {
        return Err(KeyError::InvalidSignature);
    }
    let (compact, tail) = signature.split_at(RECOVERABLE_SIGNATURE_LEN - 1);
    let v = match tail[0] {
        v @ 0..=3 => v,
        v @ 27..=30 => v - RECOVERY_ID_OFFSET,
        _ => return Err(KeyError::InvalidSignature),
    };

    let recovery_id =
        RecoveryId::from_i32(i32::from(v)).map_err(|_| KeyError::InvalidSignature)?;
    let sig = RecoverableSignature::from_compact(compact, recovery_id)
        .map_err(|_| KeyError::InvalidSignature)?;
    let message = Message::from_digest_slice(&prehash(message_hash))?;

    let secp = Secp256k1::verification_only();
    secp.recover_ecdsa(&message, &sig).map_err(|_| KeyError::InvalidSignature)
}
