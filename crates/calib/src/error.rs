//! Error types for the notus-calib crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the notus-calib crate.
///
/// This enum covers file access, TOML parsing, and every structural
/// check performed while converting the raw schema into a typed
/// bundle. Each variant names the part of the file it rejects so a
/// calibration mistake can be fixed without reading the loader.
#[derive(Debug, thiserror::Error)]
pub enum CalibError {
    /// Returned when the calibration file cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps a TOML syntax or schema error.
    #[error("calibration parse error: {reason}")]
    Parse {
        /// Description of the underlying parse failure.
        reason: String,
    },

    /// Returned when the basin label is empty.
    #[error("basin label is empty")]
    EmptyLabel,

    /// Returned when the basin latitude is not a physical latitude.
    #[error("latitude {value} is outside [-90, 90]")]
    InvalidLatitude {
        /// The offending latitude in degrees.
        value: f64,
    },

    /// Returned when a period boundary date cannot be parsed.
    #[error("invalid period {field}: {reason}")]
    Period {
        /// Which boundary failed ("start" or "end").
        field: &'static str,
        /// Description of the underlying date failure.
        reason: String,
    },

    /// Returned when the period end precedes the period start.
    #[error("period end {end} precedes start {start}")]
    InvalidPeriod {
        /// Formatted start date.
        start: String,
        /// Formatted end date.
        end: String,
    },

    /// Returned when a spell-length distribution cannot be built.
    #[error("{state} spell distribution for month {month}: {reason}")]
    Spell {
        /// Which table the entry came from ("dry" or "wet").
        state: &'static str,
        /// One-based month of the offending triple.
        month: u8,
        /// Description of the underlying parameter failure.
        reason: String,
    },

    /// Returned when a depth distribution cannot be built.
    #[error("depth distribution for month {month}: {reason}")]
    Depth {
        /// One-based month of the offending quadruple.
        month: u8,
        /// Description of the underlying parameter failure.
        reason: String,
    },

    /// Returned when the depth table as a whole is rejected.
    #[error("depth table: {reason}")]
    DepthTable {
        /// Description of the underlying table failure.
        reason: String,
    },

    /// Wraps an error from the temperature block: coefficients,
    /// moments, adjustments, or climatology contents.
    #[error("temperature block: {reason}")]
    Temperature {
        /// Description of the underlying temperature failure.
        reason: String,
    },

    /// Returned when a climatology array has the wrong length.
    #[error("climatology table {table} has {got} entries, expected {expected}")]
    TableLength {
        /// Which table was rejected.
        table: &'static str,
        /// Required number of entries.
        expected: usize,
        /// Number of entries found.
        got: usize,
    },
}

impl From<toml::de::Error> for CalibError {
    fn from(e: toml::de::Error) -> Self {
        CalibError::Parse {
            reason: e.to_string(),
        }
    }
}

impl From<notus_temperature::TemperatureError> for CalibError {
    fn from(e: notus_temperature::TemperatureError) -> Self {
        CalibError::Temperature {
            reason: e.to_string(),
        }
    }
}
