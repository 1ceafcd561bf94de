//! The encrypted record store: one sealed document per account key.

use haven_crypto::{
    base64_decode, base64_encode, derive_record_key, generate_random_bytes, open_text, seal_text,
    DOMAIN_ACCOUNT_RECORD, KDF_SALT_SIZE,
};
use serde::{de::DeserializeOwned, Serialize};
use zeroize::Zeroizing;

use crate::backend::StorageBackend;
use crate::error::{Result, StoreError};
use crate::record::{SealedRecord, RECORD_VERSION};
use crate::session::SessionContext;

/// Encrypted record store over a flat string-keyed persistence collaborator.
///
/// One sealed blob per account key; every save replaces the whole document.
/// The secret and account key are threaded in explicitly — either directly
/// ([`save_for`](Self::save_for)/[`load_for`](Self::load_for)) or resolved
/// from a [`SessionContext`] ([`save`](Self::save)/[`load`](Self::load)) —
/// so the store carries no ambient state.
pub struct RecordStore<B> {
    backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Wrap a persistence backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Borrow the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Unwrap the store, returning the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Seal `document` under `account_key` and upsert it into the backend.
    ///
    /// Nothing is written unless every earlier step succeeds, so a failed
    /// save leaves any previously stored record intact. Empty secrets and
    /// account keys are rejected as [`StoreError::SessionUnavailable`].
    pub fn save_for<T: Serialize>(
        &mut self,
        account_key: &str,
        secret: &str,
        document: &T,
    ) -> Result<()> {
        if account_key.is_empty() || secret.is_empty() {
            return Err(StoreError::SessionUnavailable);
        }

        let plaintext = Zeroizing::new(
            serde_json::to_vec(document).map_err(|e| StoreError::Serialization(e.to_string()))?,
        );

        let salt: [u8; KDF_SALT_SIZE] = generate_random_bytes()?;
        let key = derive_record_key(secret, &salt)?;
        let blob = seal_text(&key, &plaintext, &record_aad(account_key))?;

        let record = SealedRecord {
            version: RECORD_VERSION,
            kdf_salt: base64_encode(&salt),
            blob,
        };
        let value =
            serde_json::to_string(&record).map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.backend.set(account_key, value)?;
        tracing::debug!(account = account_key, "sealed record saved");
        Ok(())
    }

    /// Load and open the record stored under `account_key`.
    pub fn load_for<T: DeserializeOwned>(&self, account_key: &str, secret: &str) -> Result<T> {
        if account_key.is_empty() || secret.is_empty() {
            return Err(StoreError::SessionUnavailable);
        }

        let value = self
            .backend
            .get(account_key)?
            .ok_or(StoreError::NotFound)?;

        let record: SealedRecord =
            serde_json::from_str(&value).map_err(|e| StoreError::DecodeFailed(e.to_string()))?;
        if record.version != RECORD_VERSION {
            return Err(StoreError::UnsupportedVersion(record.version));
        }

        let salt = base64_decode(&record.kdf_salt)?;
        let key = derive_record_key(secret, &salt)?;
        let plaintext = open_text(&key, &record.blob, &record_aad(account_key))?;

        serde_json::from_slice(&plaintext).map_err(|e| StoreError::DecodeFailed(e.to_string()))
    }

    /// Session-gated save: resolves the account key and secret from
    /// `session`, failing with [`StoreError::SessionUnavailable`] when
    /// either is absent.
    pub fn save<T, S>(&mut self, session: &S, document: &T) -> Result<()>
    where
        T: Serialize,
        S: SessionContext,
    {
        let (account_key, secret) = resolve_session(session)?;
        self.save_for(&account_key, &secret, document)
    }

    /// Session-gated load.
    pub fn load<T, S>(&self, session: &S) -> Result<T>
    where
        T: DeserializeOwned,
        S: SessionContext,
    {
        let (account_key, secret) = resolve_session(session)?;
        self.load_for(&account_key, &secret)
    }

    /// Fail-soft save: `false` on any failure, and the backend is left
    /// untouched.
    pub fn try_save<T, S>(&mut self, session: &S, document: &T) -> bool
    where
        T: Serialize,
        S: SessionContext,
    {
        match self.save(session, document) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "record save failed");
                false
            }
        }
    }

    /// Fail-soft load: every failure path degrades to `default`.
    ///
    /// A missing record (first run) and a logged-out session are the
    /// normal cases and are not logged; anything else is.
    pub fn load_or<T, S>(&self, session: &S, default: T) -> T
    where
        T: DeserializeOwned,
        S: SessionContext,
    {
        match self.load(session) {
            Ok(document) => document,
            Err(StoreError::NotFound) | Err(StoreError::SessionUnavailable) => default,
            Err(err) => {
                tracing::warn!(error = %err, "record load failed, returning default");
                default
            }
        }
    }
}

/// AAD binds the domain string and the account key, so a sealed record
/// cannot be replayed under a different account.
fn record_aad(account_key: &str) -> Vec<u8> {
    let mut aad = Vec::with_capacity(DOMAIN_ACCOUNT_RECORD.len() + account_key.len());
    aad.extend_from_slice(DOMAIN_ACCOUNT_RECORD.as_bytes());
    aad.extend_from_slice(account_key.as_bytes());
    aad
}

fn resolve_session<S: SessionContext>(session: &S) -> Result<(String, Zeroizing<String>)> {
    let account_key = session
        .account_key()
        .filter(|k| !k.is_empty())
        .ok_or(StoreError::SessionUnavailable)?;
    let secret = session
        .secret()
        .filter(|s| !s.is_empty())
        .ok_or(StoreError::SessionUnavailable)?;
    Ok((account_key, secret))
}
