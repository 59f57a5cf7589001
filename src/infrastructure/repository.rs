//! Record repository: the single owner of the pattern and journal collections

use crate::domain::{EntryDraft, IdGenerator, JournalEntry, Pattern, PatternDraft};
use crate::error::{GrindlogError, Result};
use crate::infrastructure::store::{
    load_collection, save_collection, KeyValueStore, JOURNAL_KEY, PATTERNS_KEY,
};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

/// A collection that could not be loaded and was replaced by an empty one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadIssue {
    pub key: String,
    pub message: String,
}

/// CRUD over patterns and journal entries, writing every change through to
/// the store as a full snapshot of the affected collection.
pub struct Repository<S: KeyValueStore> {
    store: S,
    patterns: Vec<Pattern>,
    entries: Vec<JournalEntry>,
    ids: IdGenerator,
    diagnostics: Vec<LoadIssue>,
}

impl<S: KeyValueStore> Repository<S> {
    /// Load both collections. A collection that fails to load starts empty
    /// and is reported through [`Repository::diagnostics`].
    pub fn open(store: S) -> Self {
        let mut diagnostics = Vec::new();
        let patterns: Vec<Pattern> = load_or_empty(&store, PATTERNS_KEY, &mut diagnostics);
        let entries: Vec<JournalEntry> = load_or_empty(&store, JOURNAL_KEY, &mut diagnostics);

        let ids = IdGenerator::seeded(
            patterns
                .iter()
                .map(|p| p.id)
                .chain(entries.iter().map(|e| e.id)),
        );

        tracing::debug!(
            patterns = patterns.len(),
            entries = entries.len(),
            "opened repository"
        );

        Repository {
            store,
            patterns,
            entries,
            ids,
            diagnostics,
        }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn journal_entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn pattern(&self, id: i64) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    pub fn journal_entry(&self, id: i64) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Collections that could not be loaded when the repository was opened
    pub fn diagnostics(&self) -> &[LoadIssue] {
        &self.diagnostics
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_pattern(&mut self, draft: PatternDraft) -> Result<Pattern> {
        draft.validate()?;
        let pattern = draft.into_pattern(self.ids.next_id(Utc::now()));

        let mut updated = self.patterns.clone();
        updated.push(pattern.clone());
        self.commit_patterns(updated)?;

        Ok(pattern)
    }

    /// Replace every editable field of the pattern with `id`.
    pub fn update_pattern(&mut self, id: i64, draft: PatternDraft) -> Result<Pattern> {
        draft.validate()?;
        let index = self
            .patterns
            .iter()
            .position(|p| p.id == id)
            .ok_or(GrindlogError::NotFound {
                kind: "Pattern",
                id,
            })?;

        let pattern = draft.into_pattern(id);
        let mut updated = self.patterns.clone();
        updated[index] = pattern.clone();
        self.commit_patterns(updated)?;

        Ok(pattern)
    }

    /// Remove the pattern with `id`. Returns whether anything was removed;
    /// deleting an unknown id leaves the store untouched.
    pub fn delete_pattern(&mut self, id: i64) -> Result<bool> {
        if self.pattern(id).is_none() {
            return Ok(false);
        }
        let updated: Vec<Pattern> = self
            .patterns
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        self.commit_patterns(updated)?;
        Ok(true)
    }

    pub fn add_journal_entry(&mut self, draft: EntryDraft) -> Result<JournalEntry> {
        self.add_journal_entry_at(draft, Utc::now())
    }

    /// Add an entry dated `now`.
    pub fn add_journal_entry_at(
        &mut self,
        draft: EntryDraft,
        now: DateTime<Utc>,
    ) -> Result<JournalEntry> {
        draft.validate()?;
        let entry = draft.into_entry(self.ids.next_id(now), now);

        let mut updated = self.entries.clone();
        updated.push(entry.clone());
        self.commit_entries(updated)?;

        Ok(entry)
    }

    /// Replace every editable field of the entry with `id`; `id` and `date`
    /// are kept.
    pub fn update_journal_entry(&mut self, id: i64, draft: EntryDraft) -> Result<JournalEntry> {
        draft.validate()?;
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(GrindlogError::NotFound {
                kind: "Journal entry",
                id,
            })?;

        let entry = draft.into_entry(id, self.entries[index].date);
        let mut updated = self.entries.clone();
        updated[index] = entry.clone();
        self.commit_entries(updated)?;

        Ok(entry)
    }

    pub fn delete_journal_entry(&mut self, id: i64) -> Result<bool> {
        if self.journal_entry(id).is_none() {
            return Ok(false);
        }
        let updated: Vec<JournalEntry> = self
            .entries
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        self.commit_entries(updated)?;
        Ok(true)
    }

    // The in-memory collection only changes once the snapshot is stored.
    fn commit_patterns(&mut self, updated: Vec<Pattern>) -> Result<()> {
        save_collection(&mut self.store, PATTERNS_KEY, &updated)?;
        tracing::debug!(count = updated.len(), "saved {}", PATTERNS_KEY);
        self.patterns = updated;
        Ok(())
    }

    fn commit_entries(&mut self, updated: Vec<JournalEntry>) -> Result<()> {
        save_collection(&mut self.store, JOURNAL_KEY, &updated)?;
        tracing::debug!(count = updated.len(), "saved {}", JOURNAL_KEY);
        self.entries = updated;
        Ok(())
    }
}

fn load_or_empty<T, S>(store: &S, key: &str, diagnostics: &mut Vec<LoadIssue>) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore,
{
    match load_collection(store, key) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to load collection, starting empty");
            let message = match e {
                GrindlogError::Persistence { message, .. } => message,
                other => other.to_string(),
            };
            diagnostics.push(LoadIssue {
                key: key.to_string(),
                message,
            });
            Vec::new()
        }
    }
}
