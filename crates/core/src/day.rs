//! Day numbers within the challenge.

use serde::{Deserialize, Serialize};
use crate::error::CoreError;

/// Number of days in a challenge.
pub const CHALLENGE_DAYS: u8 = 7;

/// A validated day of the challenge, always in `1..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayNumber(u8);

impl DayNumber {
    /// The first day of the challenge.
    pub const FIRST: DayNumber = DayNumber(1);

    /// The last day of the challenge.
    pub const LAST: DayNumber = DayNumber(CHALLENGE_DAYS);

    /// Create a day number, rejecting anything outside `1..=7`.
    pub fn new(value: i64) -> Result<Self, CoreError> {
        if (1..=CHALLENGE_DAYS as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CoreError::InvalidDayNumber(value))
        }
    }

    /// Raw value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// The day before this one, if any.
    pub fn previous(self) -> Option<Self> {
        (self.0 > 1).then(|| Self(self.0 - 1))
    }

    /// The day after this one, saturating at the last day.
    pub fn next_saturating(self) -> Self {
        Self((self.0 + 1).min(CHALLENGE_DAYS))
    }

    /// Iterate over every day of the challenge in order.
    pub fn all() -> impl Iterator<Item = DayNumber> {
        (1..=CHALLENGE_DAYS).map(DayNumber)
    }
}

impl Default for DayNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u8> for DayNumber {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as i64)
    }
}

impl From<DayNumber> for u8 {
    fn from(day: DayNumber) -> Self {
        day.0
    }
}

impl std::fmt::Display for DayNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for DayNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::UnparsableDay(s.to_string()))?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(DayNumber::new(0).is_err());
        assert!(DayNumber::new(8).is_err());
        assert!(DayNumber::new(-3).is_err());
        assert_eq!(DayNumber::new(1).unwrap(), DayNumber::FIRST);
        assert_eq!(DayNumber::new(7).unwrap(), DayNumber::LAST);
    }

    #[test]
    fn test_neighbours() {
        assert_eq!(DayNumber::FIRST.previous(), None);
        assert_eq!(DayNumber::new(4).unwrap().previous(), Some(DayNumber::new(3).unwrap()));
        assert_eq!(DayNumber::LAST.next_saturating(), DayNumber::LAST);
        assert_eq!(DayNumber::all().count(), 7);
    }

    #[test]
    fn test_parse() {
        assert_eq!("3".parse::<DayNumber>().unwrap().get(), 3);
        assert!(matches!("9".parse::<DayNumber>(), Err(CoreError::InvalidDayNumber(9))));
        assert!(matches!("x".parse::<DayNumber>(), Err(CoreError::UnparsableDay(_))));
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<DayNumber>("0").is_err());
        assert_eq!(serde_json::from_str::<DayNumber>("5").unwrap().get(), 5);
        assert_eq!(serde_json::to_string(&DayNumber::LAST).unwrap(), "7");
    }
}
