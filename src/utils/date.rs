//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct, enough to derive the
//! calendar year from a unix timestamp.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::from_unix_secs(1_718_461_845);
//! assert_eq!(dt.to_rfc3339(), "2024-06-15T14:30:45Z");
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

const SECS_PER_DAY: u64 = 86_400;

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Current wall-clock time.
    ///
    /// A system clock set before 1970 reads as the epoch.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix_secs(secs)
    }

    /// Convert seconds since the unix epoch into a UTC calendar datetime.
    ///
    /// Uses the days-to-civil algorithm (proleptic Gregorian calendar,
    /// eras of 400 years).
    #[allow(clippy::cast_possible_truncation)] // Each component is range-bounded
    pub const fn from_unix_secs(secs: u64) -> Self {
        let days = secs / SECS_PER_DAY;
        let rem = secs % SECS_PER_DAY;

        // Shift epoch to 0000-03-01 so leap days fall at the end of a year.
        let z = days + 719_468;
        let era = z / 146_097;
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };

        Self::new(
            year as u16,
            month as u8,
            day as u8,
            (rem / 3600) as u8,
            ((rem / 60) % 60) as u8,
            (rem % 60) as u8,
        )
    }

    /// Format as RFC 3339 (ISO 8601).
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        assert_eq!(
            DateTimeUtc::from_unix_secs(0),
            DateTimeUtc::new(1970, 1, 1, 0, 0, 0)
        );
    }

    #[test]
    fn test_known_instant() {
        let dt = DateTimeUtc::from_unix_secs(1_718_461_845);
        assert_eq!(dt.to_rfc3339(), "2024-06-15T14:30:45Z");
    }

    #[test]
    fn test_leap_day() {
        // 2024-02-29T00:00:00Z
        let dt = DateTimeUtc::from_unix_secs(1_709_164_800);
        assert_eq!((dt.year, dt.month, dt.day), (2024, 2, 29));
    }

    #[test]
    fn test_year_boundary() {
        // 2024-12-31T23:59:59Z and one second later
        let last = DateTimeUtc::from_unix_secs(1_735_689_599);
        let first = DateTimeUtc::from_unix_secs(1_735_689_600);
        assert_eq!(last.to_rfc3339(), "2024-12-31T23:59:59Z");
        assert_eq!(first.to_rfc3339(), "2025-01-01T00:00:00Z");
    }

    #[test]
    fn test_now_is_after_epoch() {
        assert!(DateTimeUtc::now().year >= 2024);
    }
}
