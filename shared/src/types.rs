//! Common types used across the platform

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Time-range filter applied to derived series
///
/// Filtering is a display window: it retains points whose end date falls
/// within the window and never changes already-computed values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    #[default]
    All,
    LastDays(u32),
}

impl TimeRange {
    /// Whether `date` falls inside the window ending at `today`
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            TimeRange::All => true,
            TimeRange::LastDays(n) => {
                let start = today - Duration::days(i64::from(*n));
                date >= start && date <= today
            }
        }
    }
}
