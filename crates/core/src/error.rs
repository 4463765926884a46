//! Core error type.

/// Errors raised while building core values from untrusted input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    /// Day number outside the challenge
    #[error("invalid day number {0}: expected 1-7")]
    InvalidDayNumber(i64),

    /// Day number that is not an integer at all
    #[error("cannot parse day number from {0:?}")]
    UnparsableDay(String),

    /// Goal tag that is not one of the known categories
    #[error("unknown goal: {0}")]
    UnknownGoal(String),
}
