//! Record key derivation from the session secret using Argon2id.

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroizing;

use crate::constants::argon2_params;
use crate::errors::{CryptoError, Result};

/// Derive a 32-byte record encryption key from a session secret.
///
/// Deterministic in `(secret, salt)`: the same pair always yields the same
/// key. A fresh salt is generated on every save and persisted inside the
/// record envelope, so two saves of identical content never share a key.
///
/// An empty secret derives a key like any other; the record store is the
/// layer that rejects empty secrets.
pub fn derive_record_key(secret: &str, salt: &[u8]) -> Result<Zeroizing<[u8; 32]>> {
    let params = Params::new(
        argon2_params::MEMORY_COST,
        argon2_params::TIME_COST,
        argon2_params::PARALLELISM,
        Some(argon2_params::OUTPUT_LENGTH),
    )
    .map_err(|e| CryptoError::KeyDerivation(format!("invalid Argon2 parameters: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; 32];
    argon2
        .hash_password_into(secret.as_bytes(), salt, &mut key)
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;

    Ok(Zeroizing::new(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        let salt = [7u8; 32];
        let key1 = derive_record_key("correct horse", &salt).unwrap();
        let key2 = derive_record_key("correct horse", &salt).unwrap();
        assert_eq!(*key1, *key2);
    }

    #[test]
    fn test_different_salts_give_different_keys() {
        let key1 = derive_record_key("correct horse", &[1u8; 32]).unwrap();
        let key2 = derive_record_key("correct horse", &[2u8; 32]).unwrap();
        assert_ne!(*key1, *key2);
    }

    #[test]
    fn test_different_secrets_give_different_keys() {
        let salt = [7u8; 32];
        let key1 = derive_record_key("correct horse", &salt).unwrap();
        let key2 = derive_record_key("battery staple", &salt).unwrap();
        assert_ne!(*key1, *key2);
    }

    #[test]
    fn test_empty_secret_still_derives() {
        // Rejected at the store layer, legal here.
        let key = derive_record_key("", &[7u8; 32]).unwrap();
        assert_eq!(key.len(), 32);
    }

    #[test]
    fn test_short_salt_is_rejected() {
        let result = derive_record_key("correct horse", &[1u8; 2]);
        assert!(matches!(result, Err(CryptoError::KeyDerivation(_))));
    }
}
