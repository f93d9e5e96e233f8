//! # notus-calendar
//!
//! Gregorian date arithmetic for daily simulation, leap years included.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"Date::new()"| C["Date"]
//!     B["Doy (1..=366)"] -->|"Date::from_year_doy()"| C
//!     C -->|".doy()"| B
//!     C -->|".next()"| C
//!     C -->|"date_sequence()"| D["Vec of Date"]
//!     C -->|"date_range_inclusive()"| D
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use notus_calendar::{Date, date_range_inclusive, is_leap_year};
//!
//! let start: Date = "2024-01-01".parse().unwrap();
//! let end: Date = "2024-03-01".parse().unwrap();
//!
//! // Leap day falls inside the range.
//! assert!(is_leap_year(2024));
//! let dates = date_range_inclusive(start, end);
//! assert_eq!(dates.len(), 61);
//! ```
//!
//! Day-of-year values index 366-slot climatology tables directly: slot 60
//! serves February 29 in leap years and March 1 otherwise, and slot 366 is
//! reached only on December 31 of leap years.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Day-of-year newtype and month conversion tables |
//! | `year` | Leap-year rule and month lengths |
//! | `date` | Gregorian date with cached day-of-year |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod date;
mod doy;
mod error;
mod sequence;
mod year;

pub use date::Date;
pub use doy::Doy;
pub use error::CalendarError;
pub use sequence::{date_range_inclusive, date_sequence, span_days};
pub use year::{days_in_month, days_in_year, is_leap_year};
