//! XChaCha20-Poly1305 record sealing and the base64 text envelope.
//!
//! [`encrypt`]/[`decrypt`] are the raw AEAD operations; [`seal_text`] and
//! [`open_text`] wrap them in the text-safe envelope the record store
//! persists: `base64(nonce || ciphertext || tag)`.

use chacha20poly1305::{
    aead::{Aead, KeyInit, Payload},
    XChaCha20Poly1305, XNonce,
};
use zeroize::Zeroizing;

use crate::constants::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::errors::{CryptoError, Result};
use crate::utils::{base64_decode, base64_encode, generate_random_bytes};

/// Encrypt `plaintext` under `key` with the given nonce and AAD.
pub fn encrypt(
    key: &[u8; KEY_SIZE],
    plaintext: &[u8],
    nonce: &[u8; NONCE_SIZE],
    aad: &[u8],
) -> Result<Vec<u8>> {
    let cipher = XChaCha20Poly1305::new(key.into());
    cipher
        .encrypt(
            XNonce::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|_| CryptoError::Authentication)
}

/// Decrypt `ciphertext` under `key` with the given nonce and AAD.
///
/// Tag verification failure (wrong key, wrong AAD, or tampered data) is
/// [`CryptoError::Authentication`]; the plaintext is returned zeroizing.
pub fn decrypt(
    key: &[u8; KEY_SIZE],
    ciphertext: &[u8],
    nonce: &[u8; NONCE_SIZE],
    aad: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let cipher = XChaCha20Poly1305::new(key.into());
    let plaintext = cipher
        .decrypt(
            XNonce::from_slice(nonce),
            Payload {
                msg: ciphertext,
                aad,
            },
        )
        .map_err(|_| CryptoError::Authentication)?;
    Ok(Zeroizing::new(plaintext))
}

/// Seal a payload into a transport-safe text blob.
///
/// A fresh random nonce is generated per call, so sealing the same payload
/// twice yields different blobs.
pub fn seal_text(key: &[u8; KEY_SIZE], plaintext: &[u8], aad: &[u8]) -> Result<String> {
    let nonce: [u8; NONCE_SIZE] = generate_random_bytes()?;
    let ciphertext = encrypt(key, plaintext, &nonce, aad)?;

    let mut envelope = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    envelope.extend_from_slice(&nonce);
    envelope.extend_from_slice(&ciphertext);
    Ok(base64_encode(&envelope))
}

/// Open a blob produced by [`seal_text`].
///
/// Never panics on hostile input: malformed base64 or a truncated envelope
/// is [`CryptoError::Malformed`], a failed tag check is
/// [`CryptoError::Authentication`].
pub fn open_text(key: &[u8; KEY_SIZE], blob: &str, aad: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let envelope = base64_decode(blob)?;
    if envelope.len() < NONCE_SIZE + TAG_SIZE {
        return Err(CryptoError::Malformed(format!(
            "envelope too short: {} bytes",
            envelope.len()
        )));
    }

    let nonce: [u8; NONCE_SIZE] = envelope[..NONCE_SIZE]
        .try_into()
        .map_err(|_| CryptoError::Malformed("invalid nonce length".into()))?;

    decrypt(key, &envelope[NONCE_SIZE..], &nonce, aad)
}
