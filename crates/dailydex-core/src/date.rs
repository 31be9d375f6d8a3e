//! Calendar date keys
//!
//! Every persistent record is keyed by a calendar date in the canonical
//! `YYYY-MM-DD` form. A `DateKey` is always handed in by the caller; the
//! core never derives "today" on its own, so the designated timezone stays
//! a presentation-layer concern.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar date (year, month, day)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateKey {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl DateKey {
    /// Days in each month (non-leap year)
    const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    /// Create a new date key
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse the canonical `YYYY-MM-DD` form
    ///
    /// This is the one strict format in the system; anything else is an
    /// error, including unpadded months and days.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDateKey(s.to_string());

        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(invalid());
        }
        if ![y, m, d]
            .iter()
            .all(|p| p.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(invalid());
        }

        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u8 = m.parse().map_err(|_| invalid())?;
        let day: u8 = d.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) || day < 1 || day > Self::days_in_month(year, month) {
            return Err(invalid());
        }
        Ok(Self { year, month, day })
    }

    /// Check if this year is a leap year
    pub fn is_leap_year(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
    }

    /// Get days in a specific month
    pub fn days_in_month(year: i32, month: u8) -> u8 {
        if month == 2 && Self::is_leap_year(year) {
            29
        } else {
            Self::DAYS_IN_MONTH[(month - 1) as usize]
        }
    }

    /// Add days to this date (calendar arithmetic, negative allowed)
    pub fn add_days(&self, days: i32) -> Self {
        let mut year = self.year;
        let mut month = self.month;
        let mut day = self.day as i32;

        day += days;

        // Handle positive overflow
        while day > Self::days_in_month(year, month) as i32 {
            day -= Self::days_in_month(year, month) as i32;
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }

        // Handle negative underflow
        while day < 1 {
            month -= 1;
            if month < 1 {
                month = 12;
                year -= 1;
            }
            day += Self::days_in_month(year, month) as i32;
        }

        Self {
            year,
            month,
            day: day as u8,
        }
    }

    /// The calendar day immediately before this one
    pub fn prev_day(&self) -> Self {
        self.add_days(-1)
    }

    /// The calendar day immediately after this one
    pub fn next_day(&self) -> Self {
        self.add_days(1)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let date = DateKey::parse("2025-01-09").unwrap();
        assert_eq!(date, DateKey::new(2025, 1, 9));
        assert_eq!(date.to_string(), "2025-01-09");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "",
            "2025-1-09",
            "2025-01-9",
            "25-01-09",
            "2025/01/09",
            "2025-13-01",
            "2025-00-10",
            "2025-02-29",
            "2025-01-09-",
            "abcd-01-09",
            "+025-01-09",
        ] {
            assert!(DateKey::parse(bad).is_err(), "accepted {:?}", bad);
        }
        // 2024 is a leap year
        assert!(DateKey::parse("2024-02-29").is_ok());
    }

    #[test]
    fn test_add_days() {
        let date = DateKey::new(2025, 1, 31);
        assert_eq!(date.add_days(1).to_string(), "2025-02-01");
        assert_eq!(date.add_days(365).to_string(), "2026-01-31");

        let eoy = DateKey::new(2024, 12, 31);
        assert_eq!(eoy.next_day().to_string(), "2025-01-01");
    }

    #[test]
    fn test_prev_day_across_boundaries() {
        assert_eq!(DateKey::new(2025, 3, 1).prev_day().to_string(), "2025-02-28");
        assert_eq!(DateKey::new(2024, 3, 1).prev_day().to_string(), "2024-02-29");
        assert_eq!(DateKey::new(2025, 1, 1).prev_day().to_string(), "2024-12-31");
    }
}
