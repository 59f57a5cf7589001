//! Coding pattern records

use crate::domain::difficulty::{self, Difficulty, Graded};
use crate::error::{GrindlogError, Result};
use serde::{Deserialize, Serialize};

/// A reusable technique note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, with = "difficulty::lenient")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub code: String,
}

impl Graded for Pattern {
    fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }
}

/// Field values for creating or replacing a pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternDraft {
    pub title: String,
    pub description: String,
    pub difficulty: Option<Difficulty>,
    pub code: String,
}

impl PatternDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        PatternDraft {
            title: title.into(),
            description: description.into(),
            difficulty: Some(difficulty),
            code: String::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Title, description and difficulty are required.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(GrindlogError::Validation("title"));
        }
        if self.description.trim().is_empty() {
            return Err(GrindlogError::Validation("description"));
        }
        if self.difficulty.is_none() {
            return Err(GrindlogError::Validation("difficulty"));
        }
        Ok(())
    }

    pub(crate) fn into_pattern(self, id: i64) -> Pattern {
        Pattern {
            id,
            title: self.title,
            description: self.description,
            difficulty: self.difficulty,
            code: self.code,
        }
    }
}

impl From<&Pattern> for PatternDraft {
    fn from(pattern: &Pattern) -> Self {
        PatternDraft {
            title: pattern.title.clone(),
            description: pattern.description.clone(),
            difficulty: pattern.difficulty,
            code: pattern.code.clone(),
        }
    }
}
