//! Weekly focus statistics.
//!
//! Statistics are read-only. [`MockWeek`] serves a fixed week of data; a
//! persistent or remote source would implement [`StatsSource`] with the same
//! shape.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Focus minutes logged on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStat {
    /// Short day name, e.g. "Mon".
    pub label: String,
    pub minutes: u32,
}

impl DailyStat {
    pub fn new(label: impl Into<String>, minutes: u32) -> Self {
        Self {
            label: label.into(),
            minutes,
        }
    }
}

/// Read API for weekly statistics.
pub trait StatsSource {
    /// Seven entries, Monday first.
    fn weekly(&self) -> Vec<DailyStat>;
}

/// Minutes per day served by [`MockWeek`], Monday first.
const MOCK_MINUTES: [u32; 7] = [120, 150, 75, 200, 100, 50, 0];

/// Hardcoded week of sample data.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockWeek;

impl StatsSource for MockWeek {
    fn weekly(&self) -> Vec<DailyStat> {
        let mut day = Weekday::Mon;
        MOCK_MINUTES
            .iter()
            .map(|&minutes| {
                let stat = DailyStat::new(day.to_string(), minutes);
                day = day.succ();
                stat
            })
            .collect()
    }
}

/// Sum of minutes across all entries.
pub fn weekly_total_minutes(stats: &[DailyStat]) -> u32 {
    stats.iter().map(|s| s.minutes).fold(0, u32::saturating_add)
}
