//! Date sequence generation.

use crate::date::Date;

/// Generates a contiguous sequence of dates.
///
/// Starting from `start`, produces exactly `n_days` consecutive dates by
/// repeatedly advancing to the next day. Month, year, and leap-day
/// boundaries are handled by [`Date::next`].
///
/// # Example
///
/// ```ignore
/// let start = Date::new(2024, 2, 28).unwrap();
/// let dates = date_sequence(start, 3);
/// // Feb 28, Feb 29, Mar 1
/// ```
pub fn date_sequence(start: Date, n_days: usize) -> Vec<Date> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        current = current.next();
        dates.push(current);
    }
    dates
}

/// Generates every date in `start..=end`.
///
/// Returns an empty vector when `end` precedes `start`.
pub fn date_range_inclusive(start: Date, end: Date) -> Vec<Date> {
    let mut dates = Vec::new();
    if end < start {
        return dates;
    }
    let mut current = start;
    while current <= end {
        dates.push(current);
        current = current.next();
    }
    dates
}

/// Counts the days in `start..=end`, zero when `end` precedes `start`.
pub fn span_days(start: Date, end: Date) -> u64 {
    if end < start {
        return 0;
    }
    let mut count = 1u64;
    let mut current = start;
    while current < end {
        current = current.next();
        count += 1;
    }
    count
}
