//! Calendar dates in the `YYYYMMDD` wire format.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use planner_core::constants::DATE_FORMAT;

use crate::error::{RuleError, RuleResult};

/// Largest year that still fits the four-digit `YYYYMMDD` form.
const MAX_YEAR: i32 = 9999;

/// A proleptic Gregorian date with no time-of-day and no offset.
///
/// Values only come from strict `YYYYMMDD` text or from a `NaiveDate` inside
/// the four-digit year range, so formatting always yields eight digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// ## Summary
    /// Parses a date from exactly eight ASCII digits.
    ///
    /// ## Errors
    /// Returns `RuleError::InvalidDate` carrying the input when it has the
    /// wrong length, contains anything but digits, or names a day that does
    /// not exist (`20240230`, `20241301`).
    pub fn parse(text: &str) -> RuleResult<Self> {
        let invalid = || RuleError::InvalidDate(text.to_string());

        if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let field =
            |range: std::ops::Range<usize>| text[range].parse::<u32>().map_err(|_err| invalid());
        let year = i32::try_from(field(0..4)?).map_err(|_err| invalid())?;
        let month = field(4..6)?;
        let day = field(6..8)?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// ## Summary
    /// Wraps a `chrono` date, rejecting years outside `0..=9999`.
    ///
    /// ## Errors
    /// Returns `RuleError::DateOutOfRange` when the year cannot be written as
    /// four digits.
    pub fn from_naive(date: NaiveDate) -> RuleResult<Self> {
        if (0..=MAX_YEAR).contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(RuleError::DateOutOfRange(date.to_string()))
        }
    }

    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Adds `days` days, or `None` when the result leaves the four-digit range.
    #[must_use]
    pub fn add_days(self, days: u32) -> Option<Self> {
        self.0
            .checked_add_days(Days::new(u64::from(days)))
            .and_then(|date| Self::from_naive(date).ok())
    }

    /// Adds one calendar year keeping month and day.
    ///
    /// Feb 29 rolls forward to Mar 1 when the following year is not a leap
    /// year, the way a normalising date library increments years.
    #[must_use]
    pub fn add_year(self) -> Option<Self> {
        let year = self.0.year().checked_add(1)?;
        let date = NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))?;
        Self::from_naive(date).ok()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
