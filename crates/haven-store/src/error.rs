//! Store error taxonomy.

use haven_crypto::CryptoError;
use thiserror::Error;

/// Failure of the flat string-keyed persistence collaborator.
#[derive(Debug, Error)]
#[error("storage backend error: {0}")]
pub struct BackendError(pub String);

/// Errors surfaced by the encrypted record store.
///
/// `load_or` and `try_save` collapse every variant into the caller-supplied
/// default / `false`. Callers that need to react to a specific failure mode
/// use the `Result` API instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No usable secret or account key could be resolved from the session.
    #[error("no active session secret or account key")]
    SessionUnavailable,

    /// No record is stored under this account key.
    #[error("no record stored for this account")]
    NotFound,

    /// The stored record could not be decoded: corrupted envelope, bad
    /// base64, or a document that no longer parses.
    #[error("stored record is malformed: {0}")]
    DecodeFailed(String),

    /// AEAD verification failed: wrong secret or tampered record.
    #[error("authentication failed: wrong secret or tampered record")]
    Unauthenticated,

    /// The record envelope was written by an unknown format version.
    #[error("unsupported record version {0}")]
    UnsupportedVersion(u32),

    /// The document could not be serialized for sealing.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Key derivation or sealing failed for an internal reason.
    #[error("crypto error: {0}")]
    Crypto(String),

    /// The persistence collaborator failed.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<CryptoError> for StoreError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::Authentication => StoreError::Unauthenticated,
            CryptoError::Malformed(msg) => StoreError::DecodeFailed(msg),
            other => StoreError::Crypto(other.to_string()),
        }
    }
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
