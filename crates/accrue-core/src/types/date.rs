//! Date type for cash-flow calculations.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{AccrueError, AccrueResult};

/// The only accepted textual layout, ISO 8601 calendar date.
const ISO_LAYOUT: &str = "%Y-%m-%d";

/// A calendar date without time of day.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Because no time of day is
/// carried, differences between two dates are always a whole number of days.
///
/// # Example
///
/// ```rust
/// use accrue_core::types::Date;
///
/// let date = Date::from_ymd(2022, 8, 31).unwrap();
/// let next = date.add_one_month().unwrap();
/// assert_eq!(next, Date::from_ymd(2022, 10, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `AccrueError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> AccrueResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| AccrueError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `AccrueError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> AccrueResult<Self> {
        NaiveDate::parse_from_str(s, ISO_LAYOUT)
            .map(Date)
            .map_err(|_| AccrueError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Creates a date from a timestamp, discarding the time of day.
    ///
    /// The calendar date is taken in the timestamp's own time zone.
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Date(datetime.date_naive())
    }

    /// Creates a date from a naive timestamp, discarding the time of day.
    #[must_use]
    pub fn from_naive_datetime(datetime: NaiveDateTime) -> Self {
        Date(datetime.date())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of calendar months to the date.
    ///
    /// The month is advanced first and the day is then normalised: a day that does
    /// not exist in the target month overflows into the following month instead of
    /// being clamped. Jan 31 + 1 month is therefore Mar 3 (or Mar 2 in a leap year),
    /// and Aug 31 + 1 month is Oct 1.
    ///
    /// # Errors
    ///
    /// Returns `AccrueError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> AccrueResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let first = Self::from_ymd(new_year, new_month, 1)?;
        first
            .0
            .checked_add_days(Days::new(u64::from(self.day() - 1)))
            .map(Date)
            .ok_or_else(|| {
                AccrueError::invalid_date(format!("{self} + {months} months is out of range"))
            })
    }

    /// Advances the date by exactly one calendar month.
    ///
    /// See [`Date::add_months`] for the day-overflow rule.
    pub fn add_one_month(&self) -> AccrueResult<Self> {
        self.add_months(1)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    ///
    /// Negative when `other` precedes `self`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_LAYOUT))
    }
}

impl std::str::FromStr for Date {
    type Err = AccrueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}
