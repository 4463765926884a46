//! Dashboard overview of the seven days.

use chrono::Duration;
use dyvyn_core::{content, DayNumber, ProgressRecord, Time, CHALLENGE_DAYS};
use serde::Serialize;
use crate::unlock::can_access_day;

/// Where one day stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// Finalized
    Completed,
    /// Open and not yet finalized
    Available,
    /// Not open yet
    Locked,
}

/// One row of the overview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDay {
    /// Which day
    pub day: DayNumber,
    /// Theme title
    pub title: &'static str,
    /// Completion / access state
    pub status: DayStatus,
    /// The day the user should work on next
    pub is_current: bool,
}

/// The whole challenge at a glance.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    /// Rows for days 1..=7
    pub days: Vec<JourneyDay>,
    /// Days not yet completed
    pub days_remaining: usize,
    /// Share of days completed, 0-100
    pub progress_percentage: f64,
}

impl Journey {
    /// Build the overview as of `now`.
    pub fn build(record: &ProgressRecord, now: Time, unlock_after: Duration) -> Self {
        let days = DayNumber::all()
            .map(|day| {
                let completed = record.is_completed(day);
                let status = if completed {
                    DayStatus::Completed
                } else if can_access_day(record, day, now, unlock_after) {
                    DayStatus::Available
                } else {
                    DayStatus::Locked
                };
                JourneyDay {
                    day,
                    title: content::day_theme(day).title,
                    status,
                    is_current: day == record.current_day && !completed,
                }
            })
            .collect();

        let completed = record.completed_days.len();
        Self {
            days,
            days_remaining: CHALLENGE_DAYS as usize - completed,
            progress_percentage: completed as f64 / CHALLENGE_DAYS as f64 * 100.0,
        }
    }
}
