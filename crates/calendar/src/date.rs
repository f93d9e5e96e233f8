//! Gregorian date with cached day-of-year.

use std::fmt;
use std::str::FromStr;

use crate::doy::{Doy, MONTH_START_DOY, MONTH_START_DOY_LEAP, month_day_for};
use crate::error::CalendarError;
use crate::year::{days_in_month, days_in_year, is_leap_year};

/// A Gregorian calendar date.
///
/// The day-of-year is computed once at construction and cached, so
/// ordering and table lookups never re-derive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
    doy: u16,
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.doy).cmp(&(other.year, other.doy))
    }
}

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month or day is invalid for the
    /// given year (February 29 is only accepted in leap years).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        let starts = if is_leap_year(year) {
            &MONTH_START_DOY_LEAP
        } else {
            &MONTH_START_DOY
        };
        let doy = starts[month as usize] + day as u16 - 1;
        Ok(Self {
            year,
            month,
            day,
            doy,
        })
    }

    /// Creates a `Date` from a year and a day-of-year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is 366 in a
    /// common year.
    pub fn from_year_doy(year: i32, doy: Doy) -> Result<Self, CalendarError> {
        if doy.get() > days_in_year(year) {
            return Err(CalendarError::InvalidDoy { doy: doy.get() });
        }
        let (month, day) = month_day_for(doy.get(), is_leap_year(year));
        Ok(Self {
            year,
            month,
            day,
            doy: doy.get(),
        })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the day-of-year as a [`Doy`].
    pub fn doy(self) -> Doy {
        // A Date always holds a doy its constructors validated.
        Doy::new(self.doy).expect("Date always holds a valid doy")
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Returns the next calendar date.
    ///
    /// December 31 wraps to January 1 of the following year; leap days
    /// are taken in stride (Feb 28, 2024 advances to Feb 29, 2024).
    pub fn next(self) -> Self {
        if self.doy == days_in_year(self.year) {
            let jan1 = Doy::new(1).expect("doy 1 is always valid");
            Self::from_year_doy(self.year + 1, jan1).expect("doy 1 fits every year")
        } else {
            let doy = Doy::new(self.doy + 1).expect("doy + 1 within year length");
            Self::from_year_doy(self.year, doy).expect("doy checked against year length")
        }
    }
}

impl fmt::Display for Date {
    /// Formats as ISO `YYYY-MM-DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = CalendarError;

    /// Parses an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CalendarError::InvalidFormat {
            input: s.to_string(),
        };
        let mut parts = s.splitn(3, '-');
        let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        let month: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        let day: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        Date::new(year, month, day)
    }
}
