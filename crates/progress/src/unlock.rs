//! Day unlock rules.

use chrono::Duration;
use dyvyn_core::{DayNumber, ProgressRecord, Time};
use serde::Serialize;

/// Time left until the next day opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum UnlockCountdown {
    /// Nothing to wait for
    AvailableNow,
    /// Whole hours and minutes still to wait
    Remaining {
        /// Whole hours
        hours: i64,
        /// Whole minutes past the hours
        minutes: i64,
    },
}

impl UnlockCountdown {
    /// Countdown from the last completion, given the unlock interval.
    pub fn since(last_completion_at: Option<Time>, now: Time, unlock_after: Duration) -> Self {
        let Some(last) = last_completion_at else {
            return UnlockCountdown::AvailableNow;
        };

        let remaining_ms = unlock_after.num_milliseconds() - (now - last).num_milliseconds();
        if remaining_ms <= 0 {
            return UnlockCountdown::AvailableNow;
        }

        UnlockCountdown::Remaining {
            hours: remaining_ms / 3_600_000,
            minutes: (remaining_ms % 3_600_000) / 60_000,
        }
    }

    /// Whether there is nothing left to wait for.
    pub fn is_available(&self) -> bool {
        matches!(self, UnlockCountdown::AvailableNow)
    }
}

impl std::fmt::Display for UnlockCountdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnlockCountdown::AvailableNow => f.write_str("Available now"),
            UnlockCountdown::Remaining { hours, minutes } => write!(f, "{}h {}m", hours, minutes),
        }
    }
}

/// Whether `day` may be opened at `now`.
///
/// Day 1 and completed days are always open. Any other day needs the
/// previous day completed and `unlock_after` elapsed since the last
/// completion.
pub fn can_access_day(
    record: &ProgressRecord,
    day: DayNumber,
    now: Time,
    unlock_after: Duration,
) -> bool {
    if day == DayNumber::FIRST || record.is_completed(day) {
        return true;
    }

    let previous_completed = day.previous().is_some_and(|prev| record.is_completed(prev));
    if !previous_completed {
        return false;
    }

    match record.last_completion_at {
        Some(last) => now - last >= unlock_after,
        None => false,
    }
}
