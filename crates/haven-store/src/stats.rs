//! Dashboard aggregation over the decrypted account document.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{AccountDocument, NoteKind, NoteStatus};

/// Aggregate statistics for one account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountStats {
    /// Total journal entries.
    pub total_journal_entries: usize,
    /// Total notes of any kind.
    pub total_notes: usize,
    /// Notes of kind `problem` marked solved.
    pub solved_problems: usize,
    /// Consecutive days with at least one entry, counting back from today.
    pub current_streak: u32,
    /// Entry count per mood label.
    pub mood_distribution: BTreeMap<String, usize>,
    /// Journal entries plus notes created per day over the last seven
    /// days, oldest first.
    pub weekly_activity: [usize; 7],
}

/// Compute dashboard statistics as of `today`.
pub fn compute_stats(document: &AccountDocument, today: NaiveDate) -> AccountStats {
    let mut mood_distribution: BTreeMap<String, usize> = BTreeMap::new();
    for entry in &document.journal {
        *mood_distribution.entry(entry.mood.clone()).or_insert(0) += 1;
    }

    let solved_problems = document
        .notes
        .iter()
        .filter(|n| n.kind == NoteKind::Problem && n.status == NoteStatus::Solved)
        .count();

    // Activity counts journal entries by their entry date and notes by the
    // day they were created; streaks only ever count journal entries.
    let activity_dates = document
        .journal
        .iter()
        .map(|e| e.entry_date)
        .chain(document.notes.iter().map(|n| n.created_at.date_naive()));

    AccountStats {
        total_journal_entries: document.journal.len(),
        total_notes: document.notes.len(),
        solved_problems,
        current_streak: current_streak(document.journal.iter().map(|e| e.entry_date), today),
        mood_distribution,
        weekly_activity: weekly_activity(activity_dates, today),
    }
}

/// Number of consecutive days with at least one entry, counting back from
/// `today`.
///
/// A day with several entries counts once; no entry for today means the
/// streak is zero.
pub fn current_streak(dates: impl IntoIterator<Item = NaiveDate>, today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = dates.into_iter().collect();

    let mut streak = 0;
    let mut expected = today;
    while days.contains(&expected) {
        streak += 1;
        match expected.pred_opt() {
            Some(previous) => expected = previous,
            None => break,
        }
    }
    streak
}

/// Entries per day over the seven days ending at `today`, oldest first.
pub fn weekly_activity(dates: impl IntoIterator<Item = NaiveDate>, today: NaiveDate) -> [usize; 7] {
    let mut buckets = [0usize; 7];
    for date in dates {
        let offset = (today - date).num_days();
        if (0..7).contains(&offset) {
            buckets[6 - offset as usize] += 1;
        }
    }
    buckets
}
