//! # haven-crypto
//!
//! Cryptographic primitives for haven's encrypted journal storage:
//! Argon2id record-key derivation, XChaCha20-Poly1305 record sealing, and
//! the base64 text envelope consumed by the record store.
//!
//! The store persists one text-safe blob per account. Sealing is
//! derive-then-transform: a fresh salt feeds the KDF, the derived key seals
//! the serialized document, and the salted nonce-prefixed envelope is
//! base64-encoded for storage. Opening a record with the wrong secret fails
//! tag verification and surfaces [`CryptoError::Authentication`] — it never
//! yields garbage plaintext.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cipher;
pub mod constants;
pub mod errors;
pub mod kdf;
pub mod utils;

pub use cipher::{decrypt, encrypt, open_text, seal_text};
pub use constants::*;
pub use errors::CryptoError;
pub use kdf::derive_record_key;
pub use utils::{base64_decode, base64_encode, generate_random_bytes};
