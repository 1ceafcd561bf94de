//! Shared helpers for random material and the envelope text encoding.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::errors::{CryptoError, Result};

/// Generate cryptographically secure random bytes.
///
/// Uses the system's CSPRNG to fill a fixed-size array. Salts and nonces
/// for record sealing both come from here.
pub fn generate_random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    getrandom::getrandom(&mut bytes).map_err(|e| CryptoError::Rng(e.to_string()))?;
    Ok(bytes)
}

/// Base64-encode data with the standard alphabet.
pub fn base64_encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Base64-decode data; malformed input is [`CryptoError::Malformed`].
pub fn base64_decode(data: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(data)
        .map_err(|e| CryptoError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_bytes_different() {
        let bytes1: [u8; 32] = generate_random_bytes().unwrap();
        let bytes2: [u8; 32] = generate_random_bytes().unwrap();
        assert_ne!(bytes1, bytes2, "Random bytes should be different");
    }

    #[test]
    fn test_base64_roundtrip() {
        let original = b"hello world!";
        let encoded = base64_encode(original);
        let decoded = base64_decode(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_base64_decode_invalid() {
        let result = base64_decode("!!invalid!!");
        assert!(matches!(result, Err(CryptoError::Malformed(_))));
    }
}
