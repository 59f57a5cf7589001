//! Pattern library use cases

use crate::domain::{Difficulty, DifficultyFilter, Pattern, PatternDraft};
use crate::error::{GrindlogError, Result};
use crate::infrastructure::{KeyValueStore, Repository};

/// Replacement values for an existing pattern; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub code: Option<String>,
}

impl PatternEdit {
    pub fn is_empty(&self) -> bool {
        *self == PatternEdit::default()
    }

    /// Merge this edit over `current` into a full replacement draft
    pub fn apply(self, current: &Pattern) -> PatternDraft {
        let mut draft = PatternDraft::from(current);
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(difficulty) = self.difficulty {
            draft.difficulty = Some(difficulty);
        }
        if let Some(code) = self.code {
            draft.code = code;
        }
        draft
    }
}

/// Patterns matching `filter`, in insertion order
pub fn list_patterns<S: KeyValueStore>(
    repository: &Repository<S>,
    filter: DifficultyFilter,
) -> Vec<&Pattern> {
    repository
        .patterns()
        .iter()
        .filter(|p| filter.matches(p.difficulty))
        .collect()
}

pub fn edit_pattern<S: KeyValueStore>(
    repository: &mut Repository<S>,
    id: i64,
    edit: PatternEdit,
) -> Result<Pattern> {
    let current = repository.pattern(id).ok_or(GrindlogError::NotFound {
        kind: "Pattern",
        id,
    })?;
    let draft = edit.apply(current);
    repository.update_pattern(id, draft)
}
