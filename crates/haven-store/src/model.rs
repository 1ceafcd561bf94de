//! Typed journal documents sealed into the account record.
//!
//! The store itself is generic over any serializable document; these types
//! are the canonical payload one account seals: journal entries plus the
//! private notes tracked alongside them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single dated journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Stable entry id.
    pub id: Uuid,
    /// Short title.
    pub title: String,
    /// Entry body.
    pub content: String,
    /// Free-form mood label ("happy", "anxious", ...).
    pub mood: String,
    /// User tags.
    pub tags: Vec<String>,
    /// The day this entry is about (streaks count these, not timestamps).
    pub entry_date: NaiveDate,
    /// Starred by the user.
    pub is_favorite: bool,
    /// Word count of the body, derived on creation.
    pub word_count: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Create an entry dated `entry_date`; the word count is derived from
    /// the content.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        mood: impl Into<String>,
        entry_date: NaiveDate,
    ) -> Self {
        let content = content.into();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            mood: mood.into(),
            tags: Vec::new(),
            entry_date,
            is_favorite: false,
            word_count: count_words(&content),
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach tags to the entry.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

fn count_words(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}

/// Category of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    /// Free-form diary note.
    Diary,
    /// A problem being worked through.
    Problem,
    /// A named fear.
    Fear,
    /// A moment of courage.
    Courage,
    /// A trauma record.
    Trauma,
}

/// Lifecycle state of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatus {
    /// Open and unresolved.
    Active,
    /// Being worked on.
    Progress,
    /// Resolved.
    Solved,
    /// Kept for reference.
    Archived,
}

/// User-assigned priority of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotePriority {
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

/// A private note tracked alongside the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Stable note id.
    pub id: Uuid,
    /// Short title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// Category.
    pub kind: NoteKind,
    /// Lifecycle state.
    pub status: NoteStatus,
    /// User-assigned priority.
    pub priority: NotePriority,
    /// User tags.
    pub tags: Vec<String>,
    /// When the note was marked solved, if it was.
    pub solved_at: Option<DateTime<Utc>>,
    /// Optional reminder date.
    pub reminder_date: Option<NaiveDate>,
    /// Hidden from any shared view.
    pub is_private: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create an active, private, medium-priority note.
    pub fn new(title: impl Into<String>, content: impl Into<String>, kind: NoteKind) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            kind,
            status: NoteStatus::Active,
            priority: NotePriority::Medium,
            tags: Vec::new(),
            solved_at: None,
            reminder_date: None,
            is_private: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the note solved, stamping `solved_at`.
    pub fn mark_solved(&mut self) {
        let now = Utc::now();
        self.status = NoteStatus::Solved;
        self.solved_at = Some(now);
        self.updated_at = now;
    }
}

/// Everything sealed under one account key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountDocument {
    /// Journal entries, unordered.
    pub journal: Vec<JournalEntry>,
    /// Private notes.
    pub notes: Vec<Note>,
}
