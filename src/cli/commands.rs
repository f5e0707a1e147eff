//! CLI commands
//!
//! Each command builds a serializable report from the library functions and
//! prints it either as text or as pretty JSON.

use std::fmt;

use serde::Serialize;
use zeroize::Zeroize;

use crate::crypto::{
    double_sha256_hex, hash160_hex, is_valid_hash_hex, is_valid_hex_digest, ripemd160_hex,
    sha256_hex, HashAlgorithm, KeyError, KeyPair, SHA256_LEN,
};

/// Result type for CLI operations
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Message hashed by `demo` when none is given
pub const DEFAULT_MESSAGE: &str = "Hello, Ethereum!";

/// Hex fields of a freshly generated key pair
#[derive(Serialize)]
pub struct KeyReport {
    pub private_key: String,
    pub public_key: String,
    pub compressed_public_key: String,
    pub address: String,
    pub ethereum_address: String,
}

impl KeyReport {
    pub fn from_key_pair(key_pair: &KeyPair) -> Self {
        Self {
            private_key: key_pair.private_key_hex().as_str().to_owned(),
            public_key: key_pair.public_key_hex(),
            compressed_public_key: key_pair.compressed_public_key_hex(),
            address: key_pair.address(),
            ethereum_address: key_pair.ethereum_address(),
        }
    }
}

impl fmt::Debug for KeyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyReport")
            .field("private_key", &"[REDACTED]")
            .field("public_key", &self.public_key)
            .field("compressed_public_key", &self.compressed_public_key)
            .field("address", &self.address)
            .field("ethereum_address", &self.ethereum_address)
            .finish()
    }
}

impl Drop for KeyReport {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

/// Everything the demonstration prints
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub message: String,
    pub sha256: String,
    pub double_sha256: String,
    pub ripemd160: String,
    pub hash160: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair: Option<KeyReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_error: Option<String>,
    pub hash_format_valid: bool,
}

impl DemoReport {
    /// Hash the message and generate one key pair
    pub fn build(message: &str) -> Self {
        Self::with_key_pair(message, KeyPair::generate())
    }

    /// Hash the message and report on an already generated key pair.
    ///
    /// A key generation failure is recorded in the report instead of
    /// aborting, so the hash results are still shown.
    pub fn with_key_pair(message: &str, key_pair: Result<KeyPair, KeyError>) -> Self {
        let data = message.as_bytes();
        let sha256 = sha256_hex(data);

        let (key_pair, key_error) = match key_pair {
            Ok(key_pair) => (Some(KeyReport::from_key_pair(&key_pair)), None),
            Err(e) => {
                log::error!("Key pair generation failed: {}", e);
                (None, Some(e.to_string()))
            }
        };

        Self {
            message: message.to_string(),
            hash_format_valid: is_valid_hash_hex(&sha256),
            sha256,
            double_sha256: double_sha256_hex(data),
            ripemd160: ripemd160_hex(data),
            hash160: hash160_hex(data),
            key_pair,
            key_error,
        }
    }

    /// Human-readable rendering of the results (errors are not included)
    pub fn render(&self) -> String {
        let mut out = format!(
            "Message: {}\nSHA-256: {}\nDouble SHA-256: {}\nRIPEMD-160: {}\nHash160: {}\n",
            self.message, self.sha256, self.double_sha256, self.ripemd160, self.hash160
        );
        out.push_str("\n--- ECDSA Key Pair (secp256k1) ---\n");
        if let Some(keys) = &self.key_pair {
            out.push_str(&format!(
                "Private Key: {}\nPublic Key: {}\n",
                keys.private_key, keys.public_key
            ));
        }
        out.push_str(&format!("\nHash Format Valid: {}\n", self.hash_format_valid));
        out
    }
}

/// A single digest
#[derive(Debug, Serialize)]
pub struct HashReport {
    pub algorithm: String,
    pub input: String,
    pub digest: String,
}

impl HashReport {
    pub fn build(algorithm: HashAlgorithm, input: &str) -> Self {
        Self {
            algorithm: algorithm.name().to_string(),
            input: input.to_string(),
            digest: algorithm.hash_hex(input.as_bytes()),
        }
    }
}

/// Outcome of a hash format check
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub input: String,
    pub digest_len: usize,
    pub valid: bool,
}

impl ValidationReport {
    /// Without an explicit length the SHA-256 sized check is used
    pub fn build(input: &str, digest_len: Option<usize>) -> Self {
        let (digest_len, valid) = match digest_len {
            Some(len) => (len, is_valid_hex_digest(input, len)),
            None => (SHA256_LEN, is_valid_hash_hex(input)),
        };
        Self {
            input: input.to_string(),
            digest_len,
            valid,
        }
    }
}

fn print_json<T: Serialize>(report: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

/// Run the demonstration over one message
pub fn cmd_demo(message: &str, json: bool) -> CliResult<()> {
    let report = DemoReport::build(message);

    if json {
        return print_json(&report);
    }

    println!("🔐 Crypto utilities demo\n");
    print!("{}", report.render());
    if let Some(error) = &report.key_error {
        eprintln!("Error: {}", error);
    }
    println!("\n✅ Crypto utilities demo completed");
    Ok(())
}

/// Hash one input with the chosen algorithm
pub fn cmd_hash(algorithm: HashAlgorithm, input: &str, json: bool) -> CliResult<()> {
    let report = HashReport::build(algorithm, input);

    if json {
        return print_json(&report);
    }

    println!("{}", report.digest);
    Ok(())
}

/// Generate and print a new key pair
pub fn cmd_keygen(json: bool) -> CliResult<()> {
    let key_pair = KeyPair::generate()?;
    let report = KeyReport::from_key_pair(&key_pair);

    if json {
        return print_json(&report);
    }

    println!("🔑 New secp256k1 key pair");
    println!("   ├─ Private key: {}", report.private_key);
    println!("   ├─ Public key: {}", report.public_key);
    println!("   ├─ Compressed: {}", report.compressed_public_key);
    println!("   ├─ Address: {}", report.address);
    println!("   └─ Ethereum address: {}", report.ethereum_address);
    println!("\n⚠️  Keep your private key secret!");
    Ok(())
}

/// Check a hex digest string
pub fn cmd_validate(input: &str, digest_len: Option<usize>, json: bool) -> CliResult<()> {
    let report = ValidationReport::build(input, digest_len);

    if json {
        return print_json(&report);
    }

    println!("{}", report.valid);
    Ok(())
}
