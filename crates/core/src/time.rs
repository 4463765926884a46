//! Clock abstraction so unlock and streak rules can be driven deterministically.

use chrono::{DateTime, Duration, Utc};

/// Timestamp type
pub type Time = DateTime<Utc>;

/// Source of "now" for the progress store.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// Wall-clock time
    #[default]
    System,
    /// Frozen at a given instant
    Fixed(Time),
}

impl Clock {
    /// A clock frozen at `at`.
    pub fn fixed(at: Time) -> Self {
        Self::Fixed(at)
    }

    /// Current time according to this clock.
    pub fn now(&self) -> Time {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Move a fixed clock forward. No effect on the system clock.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances() {
        let start = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let mut clock = Clock::fixed(start);
        assert_eq!(clock.now(), start);
        clock.advance(Duration::hours(25));
        assert_eq!(clock.now(), start + Duration::hours(25));
    }

    #[test]
    fn test_system_clock_ignores_advance() {
        let mut clock = Clock::System;
        clock.advance(Duration::days(30));
        assert!(clock.now() < Utc::now() + Duration::days(1));
    }
}
