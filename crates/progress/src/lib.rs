//! Progress Tracking
//!
//! The single-user progress store, day unlock rules, and the dashboard
//! overview derived from them.

#![warn(missing_docs)]

pub mod store;
pub mod unlock;
pub mod journey;

pub use store::{ProgressStore, StoreConfig, LoadOrigin, SaveStatus, DEFAULT_SNAPSHOT_KEY};
pub use unlock::{UnlockCountdown, can_access_day};
pub use journey::{Journey, JourneyDay, DayStatus};
