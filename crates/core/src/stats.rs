//! Completion statistics derived from a progress record.

use serde::Serialize;
use crate::day::CHALLENGE_DAYS;
use crate::record::ProgressRecord;

/// Summary numbers shown on the dashboard and completion screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStats {
    /// Percentage of the seven days completed
    pub completion_rate: f64,
    /// Credited minutes per completed day
    pub average_time_per_day: f64,
    /// Echoes the current streak; no historical maximum is kept
    pub longest_streak: u32,
    /// Days with a reflection entry
    pub total_reflections: usize,
}

impl CompletionStats {
    /// Compute stats for `record`.
    pub fn from_record(record: &ProgressRecord) -> Self {
        let completed = record.completed_days.len();
        Self {
            completion_rate: completed as f64 / CHALLENGE_DAYS as f64 * 100.0,
            average_time_per_day: record.total_time_spent as f64 / completed.max(1) as f64,
            longest_streak: record.streak,
            total_reflections: record.reflections.len(),
        }
    }
}
