//! Domain layer - Records, validation and analytics

pub mod analytics;
pub mod difficulty;
pub mod entry;
pub mod goals;
pub mod id;
pub mod pattern;
pub mod rating;

pub use analytics::{compute_progress, DayActivity, DifficultyCounts, Progress, Streaks};
pub use difficulty::{Difficulty, DifficultyFilter, Graded};
pub use entry::{EntryDraft, JournalEntry};
pub use goals::GoalProgress;
pub use id::IdGenerator;
pub use pattern::{Pattern, PatternDraft};
pub use rating::Rating;
