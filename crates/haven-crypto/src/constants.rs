//! Cryptographic constants and domain separation strings.
//!
//! All sizes follow the XChaCha20-Poly1305 / Argon2id parameter choices of
//! the record sealing scheme and MUST NOT change without a record format
//! version bump.

/// Size of record encryption keys in bytes (256 bits)
pub const KEY_SIZE: usize = 32;

/// Size of XChaCha20-Poly1305 nonces in bytes (192 bits)
pub const NONCE_SIZE: usize = 24;

/// Size of XChaCha20-Poly1305 authentication tags in bytes (128 bits)
pub const TAG_SIZE: usize = 16;

/// Size of the Argon2id salt stored with every sealed record
pub const KDF_SALT_SIZE: usize = 32;

/// Domain separation for sealed account records.
///
/// The record store appends the account key to this string and passes the
/// result as AAD, so a sealed blob cannot be replayed under another account.
pub const DOMAIN_ACCOUNT_RECORD: &str = "haven:store:account-record:v1";

/// Argon2id parameters for record key derivation
pub mod argon2_params {
    /// Memory cost: 64 MiB
    pub const MEMORY_COST: u32 = 64 * 1024;

    /// Time cost: 3 iterations
    pub const TIME_COST: u32 = 3;

    /// Parallelism: 4 lanes
    pub const PARALLELISM: u32 = 4;

    /// Output length: 32 bytes
    pub const OUTPUT_LENGTH: usize = 32;
}
