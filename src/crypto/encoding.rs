//! Hex encoding helpers
//!
//! Every digest and key in this crate leaves the library as lowercase hex.

pub use hex::FromHexError;

/// Encodes bytes as a lowercase hex string, two digits per byte
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decodes a hex string (either case) into bytes
pub fn from_hex(s: &str) -> Result<Vec<u8>, FromHexError> {
    hex::decode(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_pads_and_lowercases() {
        assert_eq!(to_hex([0x00u8, 0x0a, 0xff, 0x10]), "000aff10");
        assert_eq!(to_hex(Vec::<u8>::new()), "");
    }

    #[test]
    fn test_to_hex_length_and_charset() {
        let data: Vec<u8> = (0..=255u8).collect();
        for end in [0usize, 1, 2, 31, 32, 255, 256] {
            let encoded = to_hex(&data[..end]);
            assert_eq!(encoded.len(), 2 * end);
            assert!(encoded
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(from_hex("00ABff").unwrap(), vec![0x00, 0xab, 0xff]);
        assert!(from_hex("abc").is_err());
        assert!(from_hex("zz").is_err());
    }
}
