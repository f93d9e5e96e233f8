//! Error types for the notus-calendar crate.

/// Error type for all fallible operations in the notus-calendar crate.
///
/// Covers validation failures for day-of-year values, month numbers,
/// day-within-month values, and textual date parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a day-of-year value is outside the valid range,
    /// including 366 in a common year.
    #[error("invalid day of year: {doy} (must be 1..=365, or 366 in a leap year)")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a date string is not in `YYYY-MM-DD` form.
    #[error("invalid date string: {input:?} (expected YYYY-MM-DD)")]
    InvalidFormat {
        /// The unparseable input.
        input: String,
    },
}
