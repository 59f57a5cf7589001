//! Journal entry use cases

use crate::domain::{Difficulty, DifficultyFilter, EntryDraft, JournalEntry, Rating};
use crate::error::{GrindlogError, Result};
use crate::infrastructure::{KeyValueStore, Repository};

/// Replacement values for an existing entry.
///
/// `None` keeps the current value. For the optional fields `Some(None)`
/// clears the value, and an empty string clears a text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryEdit {
    pub title: Option<String>,
    pub platform: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub time: Option<Option<u32>>,
    pub attempts: Option<Option<u32>>,
    pub topic: Option<String>,
    pub rating: Option<Option<Rating>>,
    pub notes: Option<String>,
    pub code: Option<String>,
}

impl EntryEdit {
    pub fn is_empty(&self) -> bool {
        *self == EntryEdit::default()
    }

    /// Merge this edit over `current` into a full replacement draft
    pub fn apply(self, current: &JournalEntry) -> EntryDraft {
        let mut draft = EntryDraft::from(current);
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(platform) = self.platform {
            draft.platform = platform;
        }
        if let Some(difficulty) = self.difficulty {
            draft.difficulty = Some(difficulty);
        }
        if let Some(time) = self.time {
            draft.time = time;
        }
        if let Some(attempts) = self.attempts {
            draft.attempts = attempts;
        }
        if let Some(topic) = self.topic {
            draft.topic = topic;
        }
        if let Some(rating) = self.rating {
            draft.rating = rating;
        }
        if let Some(notes) = self.notes {
            draft.notes = notes;
        }
        if let Some(code) = self.code {
            draft.code = code;
        }
        draft
    }
}

/// Entries matching `filter`, newest first
pub fn list_entries<S: KeyValueStore>(
    repository: &Repository<S>,
    filter: DifficultyFilter,
    limit: Option<usize>,
) -> Vec<&JournalEntry> {
    let mut entries: Vec<&JournalEntry> = repository
        .journal_entries()
        .iter()
        .filter(|e| filter.matches(e.difficulty))
        .collect();

    entries.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}

pub fn edit_entry<S: KeyValueStore>(
    repository: &mut Repository<S>,
    id: i64,
    edit: EntryEdit,
) -> Result<JournalEntry> {
    let current = repository.journal_entry(id).ok_or(GrindlogError::NotFound {
        kind: "Journal entry",
        id,
    })?;
    let draft = edit.apply(current);
    repository.update_journal_entry(id, draft)
}
