//! Record id generation

use chrono::{DateTime, Utc};

/// Hands out creation-time-derived ids (epoch milliseconds).
///
/// Ids are strictly increasing: a second id requested within the same
/// millisecond, or after the clock stepped backwards, is bumped past the
/// last one handed out.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Start after the largest id already in use.
    pub fn seeded(existing: impl IntoIterator<Item = i64>) -> Self {
        IdGenerator {
            last: existing.into_iter().max().unwrap_or(0),
        }
    }

    pub fn next_id(&mut self, now: DateTime<Utc>) -> i64 {
        let id = now.timestamp_millis().max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}
