//! Streak calculation.
//!
//! Each completed day is pinned to a notional calendar date: the join date
//! plus `day - 1` days. Walking from the highest completed day downwards, a
//! day keeps the streak alive while its distance from today is at most
//! `1 + streak` whole days, so the tolerated gap widens as the streak grows.

use std::collections::BTreeSet;
use chrono::{Duration, NaiveDate};
use crate::day::DayNumber;
use crate::time::Time;

/// Calendar date (UTC midnight) a challenge day is expected to fall on.
pub fn notional_date(joined_at: Time, day: DayNumber) -> NaiveDate {
    (joined_at + Duration::days(day.get() as i64 - 1)).date_naive()
}

/// Compute the streak for `completed` as of `now`.
pub fn calculate_streak(completed: &BTreeSet<DayNumber>, joined_at: Time, now: Time) -> u32 {
    let today = now.date_naive();
    let mut streak = 0u32;

    for day in completed.iter().rev() {
        let days_diff = (today - notional_date(joined_at, *day)).num_days();
        if days_diff <= 1 + streak as i64 {
            streak += 1;
        } else {
            break;
        }
    }

    streak
}
