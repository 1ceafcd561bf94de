//! Error type for haven cryptographic operations.

use thiserror::Error;

/// Errors produced by key derivation and record sealing.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key derivation was given unusable parameters or failed internally.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// The ciphertext blob was not valid base64 or is too short to carry
    /// a nonce and tag. Distinct from [`CryptoError::Authentication`] so
    /// callers can tell corruption from a wrong secret at this layer.
    #[error("malformed ciphertext: {0}")]
    Malformed(String),

    /// AEAD tag verification failed: wrong secret or tampered record.
    #[error("authentication failed")]
    Authentication,

    /// The system random generator failed.
    #[error("random generator failure: {0}")]
    Rng(String),
}

/// Result alias for cryptographic operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
