//! Session collaborator: supplies the secret and account key for store
//! operations.
//!
//! The store never establishes or validates a session itself; it asks this
//! collaborator and degrades gracefully when either value is absent.

use std::time::{Duration, SystemTime};

use zeroize::Zeroizing;

/// Default session lifetime: 24 hours.
pub const SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Resolves the active session's secret and account key.
pub trait SessionContext {
    /// The session secret used to derive record keys, if one is active.
    fn secret(&self) -> Option<Zeroizing<String>>;

    /// The opaque key selecting this account's stored record, if resolvable.
    fn account_key(&self) -> Option<String>;
}

/// An established session holding the user's secret for its lifetime.
///
/// Once the TTL elapses the session resolves to nothing, so gated store
/// operations behave exactly as if the user had logged out.
pub struct ActiveSession {
    account_key: String,
    secret: Zeroizing<String>,
    established_at: SystemTime,
    ttl: Duration,
}

impl ActiveSession {
    /// Establish a session for `account_key` with the default TTL.
    pub fn new(account_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            account_key: account_key.into(),
            secret: Zeroizing::new(secret.into()),
            established_at: SystemTime::now(),
            ttl: SESSION_TTL,
        }
    }

    /// Override the session TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Whether the session has outlived its TTL.
    ///
    /// A clock that reports the session as established in the future counts
    /// as expired.
    pub fn is_expired(&self) -> bool {
        self.established_at
            .elapsed()
            .map(|age| age > self.ttl)
            .unwrap_or(true)
    }
}

impl SessionContext for ActiveSession {
    fn secret(&self) -> Option<Zeroizing<String>> {
        if self.is_expired() {
            return None;
        }
        Some(self.secret.clone())
    }

    fn account_key(&self) -> Option<String> {
        if self.is_expired() {
            return None;
        }
        Some(self.account_key.clone())
    }
}

/// A logged-out session: resolves nothing, gating every store operation.
pub struct NoSession;

impl SessionContext for NoSession {
    fn secret(&self) -> Option<Zeroizing<String>> {
        None
    }

    fn account_key(&self) -> Option<String> {
        None
    }
}
