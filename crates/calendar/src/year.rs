//! Year-level calendar rules: leap years and month lengths.

use crate::doy::DAYS_PER_MONTH;
use crate::error::CalendarError;

/// Returns whether `year` is a Gregorian leap year.
///
/// Divisible by 4, except century years not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the number of days in the given month of the given year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let base = DAYS_PER_MONTH[month as usize];
    if month == 2 && is_leap_year(year) {
        Ok(base + 1)
    } else {
        Ok(base)
    }
}
