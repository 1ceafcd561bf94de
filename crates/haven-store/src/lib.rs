//! # haven-store
//!
//! Encrypted per-account journal storage. A [`SessionContext`] collaborator
//! supplies the active secret and account key, `haven-crypto` seals the
//! serialized document, and a flat string-keyed [`StorageBackend`] persists
//! one blob per account.
//!
//! The store is deliberately two-faced:
//! - the `Result` API ([`RecordStore::save`], [`RecordStore::load`])
//!   distinguishes every failure mode, so a caller can react to
//!   [`StoreError::Unauthenticated`] by prompting for the secret again;
//! - the fail-soft API ([`RecordStore::try_save`], [`RecordStore::load_or`])
//!   preserves the best-effort local-cache contract: `false` or the
//!   caller-supplied default, never a panic.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod backend;
pub mod error;
pub mod model;
pub mod record;
pub mod session;
pub mod stats;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::{BackendError, StoreError};
pub use model::{AccountDocument, JournalEntry, Note, NoteKind, NotePriority, NoteStatus};
pub use record::{SealedRecord, RECORD_VERSION};
pub use session::{ActiveSession, NoSession, SessionContext, SESSION_TTL};
pub use stats::{compute_stats, current_streak, weekly_activity, AccountStats};
pub use store::RecordStore;
