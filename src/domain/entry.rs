//! Journal entries: one record per practice attempt

use crate::domain::difficulty::{self, Difficulty, Graded};
use crate::domain::rating::{self, Rating};
use crate::error::{GrindlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged practice attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default, with = "difficulty::lenient")]
    pub difficulty: Option<Difficulty>,
    /// Minutes spent
    #[serde(default, with = "optional_count")]
    pub time: Option<u32>,
    #[serde(default, with = "optional_count")]
    pub attempts: Option<u32>,
    #[serde(default)]
    pub topic: String,
    #[serde(default, with = "rating::lenient")]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub code: String,
    pub date: DateTime<Utc>,
}

impl Graded for JournalEntry {
    fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }
}

/// Field values for creating or replacing a journal entry
///
/// `id` and `date` are owned by the repository and never come from a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub platform: String,
    pub difficulty: Option<Difficulty>,
    pub time: Option<u32>,
    pub attempts: Option<u32>,
    pub topic: String,
    pub rating: Option<Rating>,
    pub notes: String,
    pub code: String,
}

impl EntryDraft {
    pub fn new(title: impl Into<String>, difficulty: Difficulty) -> Self {
        EntryDraft {
            title: title.into(),
            difficulty: Some(difficulty),
            ..Default::default()
        }
    }

    /// Title and difficulty are required.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(GrindlogError::Validation("title"));
        }
        if self.difficulty.is_none() {
            return Err(GrindlogError::Validation("difficulty"));
        }
        Ok(())
    }

    pub(crate) fn into_entry(self, id: i64, date: DateTime<Utc>) -> JournalEntry {
        JournalEntry {
            id,
            title: self.title,
            platform: self.platform,
            difficulty: self.difficulty,
            time: self.time,
            attempts: self.attempts,
            topic: self.topic,
            rating: self.rating,
            notes: self.notes,
            code: self.code,
            date,
        }
    }
}

impl From<&JournalEntry> for EntryDraft {
    fn from(entry: &JournalEntry) -> Self {
        EntryDraft {
            title: entry.title.clone(),
            platform: entry.platform.clone(),
            difficulty: entry.difficulty,
            time: entry.time,
            attempts: entry.attempts,
            topic: entry.topic.clone(),
            rating: entry.rating,
            notes: entry.notes.clone(),
            code: entry.code.clone(),
        }
    }
}

/// Optional whole-number fields. Stored as a number when set and `""` when
/// unset; numeric strings from older snapshots are accepted. Values that are
/// not a whole non-negative count load as unset.
mod optional_count {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(n) => serializer.serialize_u32(*n),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Integer(u64),
            Float(f64),
            Text(String),
            Other(IgnoredAny),
        }

        let raw: Option<Raw> = Option::deserialize(deserializer)?;
        Ok(match raw {
            Some(Raw::Integer(n)) => u32::try_from(n).ok(),
            Some(Raw::Float(f)) => from_float(f),
            Some(Raw::Text(text)) => {
                let trimmed = text.trim();
                trimmed
                    .parse::<u32>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().and_then(from_float))
            }
            Some(Raw::Other(_)) | None => None,
        })
    }

    fn from_float(f: f64) -> Option<u32> {
        (f.is_finite() && f >= 0.0 && f <= u32::MAX as f64).then(|| f.round() as u32)
    }
}
