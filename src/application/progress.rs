//! Goals & streaks report

use crate::domain::{compute_progress, DifficultyCounts, GoalProgress, Progress};
use crate::infrastructure::{Config, KeyValueStore, Repository};
use chrono::{DateTime, TimeZone};

/// Everything the stats view shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReport {
    pub pattern_counts: DifficultyCounts,
    pub progress: Progress,
    pub weekly_goal: GoalProgress,
    pub monthly_goal: GoalProgress,
}

/// Recompute the report from the current collections as of `now`.
pub fn progress_report<S, Tz>(
    repository: &Repository<S>,
    config: &Config,
    now: &DateTime<Tz>,
) -> ProgressReport
where
    S: KeyValueStore,
    Tz: TimeZone,
{
    let progress = compute_progress(repository.journal_entries(), now);

    ProgressReport {
        pattern_counts: DifficultyCounts::tally(repository.patterns()),
        weekly_goal: GoalProgress::new(progress.weekly_count, config.weekly_goal),
        monthly_goal: GoalProgress::new(progress.monthly_count, config.monthly_goal),
        progress,
    }
}
