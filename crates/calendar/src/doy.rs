//! Day-of-year newtype and month conversion tables for the Gregorian calendar.

use crate::error::CalendarError;

/// Day-of-year in the Gregorian calendar (1..=366).
///
/// Value 366 only occurs in leap years; a [`Doy`] carries no year context,
/// so year-dependent checks live in [`crate::Date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts in a common year (index 0 unused).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Day-of-year on which each month starts in a leap year (index 0 unused).
///
/// Identical to [`MONTH_START_DOY`] through February; one later from March on.
pub(crate) const MONTH_START_DOY_LEAP: [u16; 13] =
    [0, 1, 32, 61, 92, 122, 153, 183, 214, 245, 275, 306, 336];

impl Doy {
    /// Creates a new `Doy` from a day-of-year value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in 1..=366.
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        if !(1..=366).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy });
        }
        Ok(Self(doy))
    }

    /// Returns the inner day-of-year value (1..=366).
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the 0-based index suitable for indexing 366-slot
    /// day-of-year tables (0..=365).
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

/// Returns the `(month, day)` pair for a day-of-year under the given
/// leap-year context.
///
/// Callers guarantee `doy` fits the year length (366 only when `leap`).
pub(crate) fn month_day_for(doy: u16, leap: bool) -> (u8, u8) {
    let starts = if leap {
        &MONTH_START_DOY_LEAP
    } else {
        &MONTH_START_DOY
    };
    let mut month = 12u8;
    while month > 1 && starts[month as usize] > doy {
        month -= 1;
    }
    let day = (doy - starts[month as usize] + 1) as u8;
    (month, day)
}
