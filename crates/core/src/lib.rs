//! Dyvyn core data models.
//!
//! This crate defines the progress record behind the 7-day challenge, the
//! values it is built from, and the pure rules derived from it (streaks,
//! completion statistics, achievements) together with the static content
//! each day presents.

#![warn(missing_docs)]

// Identities and categories
mod day;
mod goal;
mod error;

// Record and what feeds it
mod record;
mod inputs;
mod time;

// Derived rules
pub mod streak;
mod stats;
pub mod achievement;

// Static content
pub mod content;

pub use day::{DayNumber, CHALLENGE_DAYS};
pub use goal::GoalCategory;
pub use error::CoreError;
pub use record::{ProgressRecord, ReadingCompletion, DEFAULT_NAME};
pub use inputs::{DayInputs, Requirement, MIN_SUMMARY_CHARS};
pub use time::{Clock, Time};
pub use stats::CompletionStats;
pub use achievement::Achievement;
