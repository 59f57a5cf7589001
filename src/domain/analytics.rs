//! Practice analytics: difficulty counts, streaks, rolling totals and the
//! weekly activity grid.
//!
//! Everything here is a pure function of the entries and an explicit "now".
//! Calendar questions (which day an entry falls on, where the week starts)
//! are answered in the time zone of that "now".

use crate::domain::difficulty::{Difficulty, Graded};
use crate::domain::entry::JournalEntry;
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, TimeZone, Weekday};
use std::collections::BTreeSet;

/// Number of records per difficulty. Records without a difficulty are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DifficultyCounts {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl DifficultyCounts {
    pub fn tally<'a, T, I>(items: I) -> Self
    where
        T: Graded + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut counts = DifficultyCounts::default();
        for item in items {
            match item.difficulty() {
                Some(Difficulty::Easy) => counts.easy += 1,
                Some(Difficulty::Medium) => counts.medium += 1,
                Some(Difficulty::Hard) => counts.hard += 1,
                None => {}
            }
        }
        counts
    }

    pub fn get(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn total(&self) -> usize {
        self.easy + self.medium + self.hard
    }
}

/// Activity for one weekday of the current week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayActivity {
    pub day: Weekday,
    pub count: usize,
    pub is_active: bool,
}

/// Streak lengths in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Streaks {
    /// Run ending today; 0 when today has no entry yet.
    pub current: u32,
    pub best: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub difficulty_counts: DifficultyCounts,
    pub current_streak: u32,
    pub best_streak: u32,
    pub weekly_count: usize,
    pub monthly_count: usize,
    /// Sunday first
    pub weekly_activity: [DayActivity; 7],
}

const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Distinct calendar days (in `tz`) that have at least one entry, ascending.
pub fn active_days<Tz: TimeZone>(entries: &[JournalEntry], tz: &Tz) -> Vec<NaiveDate> {
    entries
        .iter()
        .map(|entry| entry.date.with_timezone(tz).date_naive())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Walk sorted, distinct days and measure runs of consecutive days.
pub fn streaks(days: &[NaiveDate], today: NaiveDate) -> Streaks {
    let mut result = Streaks::default();
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for &day in days {
        run = match previous {
            Some(prev) if day.signed_duration_since(prev).num_days() == 1 => run + 1,
            _ => 1,
        };
        result.best = result.best.max(run);
        if day == today {
            result.current = run;
        }
        previous = Some(day);
    }

    result
}

/// Per-weekday counts for entries on or after the most recent Sunday.
pub fn weekly_activity<Tz: TimeZone>(
    entries: &[JournalEntry],
    now: &DateTime<Tz>,
) -> [DayActivity; 7] {
    let tz = now.timezone();
    let today = now.date_naive();
    let week_start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);

    let mut grid = WEEK.map(|day| DayActivity {
        day,
        count: 0,
        is_active: false,
    });

    for entry in entries {
        let local = entry.date.with_timezone(&tz);
        if local.date_naive() < week_start {
            continue;
        }
        let slot = &mut grid[local.weekday().num_days_from_sunday() as usize];
        slot.count += 1;
        slot.is_active = true;
    }

    grid
}

/// Full progress snapshot as of `now`.
pub fn compute_progress<Tz: TimeZone>(entries: &[JournalEntry], now: &DateTime<Tz>) -> Progress {
    let tz = now.timezone();
    let days = active_days(entries, &tz);
    let streaks = streaks(&days, now.date_naive());

    // Windows are measured on the local wall clock.
    let now_local = now.naive_local();
    let week_ago = now_local - Duration::days(7);
    let month_ago = now_local.checked_sub_months(Months::new(1));

    let mut weekly_count = 0;
    let mut monthly_count = 0;
    for entry in entries {
        let local = entry.date.with_timezone(&tz).naive_local();
        if local >= week_ago {
            weekly_count += 1;
        }
        if month_ago.map_or(true, |start| local >= start) {
            monthly_count += 1;
        }
    }

    Progress {
        difficulty_counts: DifficultyCounts::tally(entries),
        current_streak: streaks.current,
        best_streak: streaks.best,
        weekly_count,
        monthly_count,
        weekly_activity: weekly_activity(entries, now),
    }
}
