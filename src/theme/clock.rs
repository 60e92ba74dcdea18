//! Time source for values computed at construction.

use crate::utils::date::DateTimeUtc;

/// Supplies the current calendar year (UTC).
pub trait Clock {
    fn current_year(&self) -> u16;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> u16 {
        DateTimeUtc::now().year
    }
}

/// Always reports the same year. Used for reproducible exports and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u16);

impl FixedClock {
    /// Clock frozen at a unix timestamp.
    pub const fn at_unix_secs(secs: u64) -> Self {
        Self(DateTimeUtc::from_unix_secs(secs).year)
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(2025).current_year(), 2025);
        // 2025-06-01T00:00:00Z
        assert_eq!(FixedClock::at_unix_secs(1_748_736_000).current_year(), 2025);
    }

    #[test]
    fn test_system_clock_matches_date() {
        assert_eq!(SystemClock.current_year(), DateTimeUtc::now().year);
    }
}
