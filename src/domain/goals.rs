//! Weekly and monthly practice goals

pub const DEFAULT_WEEKLY_GOAL: u32 = 10;
pub const DEFAULT_MONTHLY_GOAL: u32 = 30;

/// How far along a count is towards its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalProgress {
    pub done: usize,
    pub target: u32,
    /// Whole percent, may exceed 100
    pub percent: u32,
}

impl GoalProgress {
    pub fn new(done: usize, target: u32) -> Self {
        let percent = if target == 0 {
            100
        } else {
            let raw = (done as u64 * 100) / target as u64;
            u32::try_from(raw).unwrap_or(u32::MAX)
        };
        GoalProgress {
            done,
            target,
            percent,
        }
    }

    /// Percent for progress bars, capped at 100
    pub fn bar_percent(&self) -> u32 {
        self.percent.min(100)
    }

    pub fn is_met(&self) -> bool {
        self.done as u64 >= self.target as u64
    }
}
