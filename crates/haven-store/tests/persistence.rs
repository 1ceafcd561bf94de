//! End-to-end flow against the file backend: seal, restart, reopen,
//! wrong-secret and tamper handling.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use haven_store::{
    AccountDocument, ActiveSession, FileBackend, JournalEntry, NoSession, Note, NoteKind,
    RecordStore, SealedRecord, StorageBackend, StoreError,
};

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("haven_store_{}", uuid::Uuid::new_v4()))
}

fn sample_document() -> AccountDocument {
    let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
    let mut document = AccountDocument::default();
    document
        .journal
        .push(JournalEntry::new("morning", "slept well", "calm", date));
    document
        .notes
        .push(Note::new("crowds", "the market was loud", NoteKind::Fear));
    document
}

#[test]
fn record_survives_restart() -> Result<()> {
    let dir = temp_dir();
    let session = ActiveSession::new("acct-1", "hunter2");
    let document = sample_document();

    {
        let mut store = RecordStore::new(FileBackend::with_dir(dir.clone())?);
        store.save(&session, &document)?;
    }

    // A fresh backend instance sees the same sealed record.
    let store = RecordStore::new(FileBackend::with_dir(dir.clone())?);
    let loaded: AccountDocument = store.load(&session)?;
    assert_eq!(loaded, document);

    fs::remove_dir_all(dir).ok();
    Ok(())
}

#[test]
fn wrong_secret_degrades_to_default() -> Result<()> {
    let dir = temp_dir();
    {
        let mut store = RecordStore::new(FileBackend::with_dir(dir.clone())?);
        store.save(&ActiveSession::new("acct-1", "hunter2"), &sample_document())?;
    }

    let store = RecordStore::new(FileBackend::with_dir(dir.clone())?);
    let wrong = ActiveSession::new("acct-1", "hunter3");

    let result: Result<AccountDocument, StoreError> = store.load(&wrong);
    assert!(matches!(result, Err(StoreError::Unauthenticated)));

    let loaded = store.load_or(&wrong, AccountDocument::default());
    assert_eq!(loaded, AccountDocument::default());

    fs::remove_dir_all(dir).ok();
    Ok(())
}

#[test]
fn tampered_file_is_detected() -> Result<()> {
    let dir = temp_dir();
    let session = ActiveSession::new("acct-1", "hunter2");

    let mut store = RecordStore::new(FileBackend::with_dir(dir.clone())?);
    store.save(&session, &sample_document())?;

    // Flip one character in the middle of the persisted blob.
    let sealed = store.backend().get("acct-1")?.expect("record was saved");
    let mut record: SealedRecord = serde_json::from_str(&sealed)?;
    let mut blob = record.blob.into_bytes();
    let mid = blob.len() / 2;
    blob[mid] = if blob[mid] == b'A' { b'B' } else { b'A' };
    record.blob = String::from_utf8(blob)?;

    let mut backend = store.into_backend();
    backend.set("acct-1", serde_json::to_string(&record)?)?;
    let store = RecordStore::new(backend);

    let result: Result<AccountDocument, StoreError> = store.load(&session);
    assert!(
        matches!(
            result,
            Err(StoreError::Unauthenticated) | Err(StoreError::DecodeFailed(_))
        ),
        "tampered record must not decrypt: {result:?}"
    );

    fs::remove_dir_all(dir).ok();
    Ok(())
}

#[test]
fn logged_out_session_cannot_touch_the_file() -> Result<()> {
    let dir = temp_dir();
    let session = ActiveSession::new("acct-1", "hunter2");

    let mut store = RecordStore::new(FileBackend::with_dir(dir.clone())?);
    store.save(&session, &sample_document())?;
    let before = fs::read_to_string(store.backend().path())?;

    assert!(!store.try_save(&NoSession, &AccountDocument::default()));
    assert_eq!(
        store.load_or(&NoSession, AccountDocument::default()),
        AccountDocument::default()
    );

    let after = fs::read_to_string(store.backend().path())?;
    assert_eq!(before, after, "gated operations must not mutate the file");

    fs::remove_dir_all(dir).ok();
    Ok(())
}

#[test]
fn accounts_are_isolated() -> Result<()> {
    let dir = temp_dir();
    let alice = ActiveSession::new("alice", "alice-secret");
    let bob = ActiveSession::new("bob", "bob-secret");

    let alice_document = sample_document();
    let mut store = RecordStore::new(FileBackend::with_dir(dir.clone())?);
    store.save(&alice, &alice_document)?;
    store.save(&bob, &AccountDocument::default())?;

    let alice_doc: AccountDocument = store.load(&alice)?;
    let bob_doc: AccountDocument = store.load(&bob)?;
    assert_eq!(alice_doc, alice_document);
    assert_eq!(bob_doc, AccountDocument::default());

    fs::remove_dir_all(dir).ok();
    Ok(())
}
