//! Sealed record envelope stored per account.

use serde::{Deserialize, Serialize};

/// Current envelope format version.
pub const RECORD_VERSION: u32 = 1;

/// The persisted value for one account: a versioned, salted, sealed blob.
///
/// `kdf_salt` is the base64 Argon2id salt this record's key was derived
/// with; `blob` is `base64(nonce || ciphertext || tag)` as produced by
/// `haven_crypto::seal_text`. Every save replaces the whole envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SealedRecord {
    /// Envelope format version; readers reject versions they don't know.
    pub version: u32,
    /// Base64-encoded Argon2id salt, fresh per save.
    pub kdf_salt: String,
    /// Base64-encoded nonce-prefixed AEAD ciphertext.
    pub blob: String,
}
