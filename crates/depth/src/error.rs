//! Error types for depth generation.

use thiserror::Error;

/// Errors that can occur while building depth tables or generating
/// depth series.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DepthError {
    /// A monthly maximum depth is unusable as a clip bound.
    #[error(
        "monthly maximum for month {month} is {max_mm} mm; it must be finite and at least the wet-day threshold"
    )]
    InvalidMonthlyMax {
        /// 1-indexed calendar month.
        month: u8,
        /// The offending maximum, in mm.
        max_mm: f64,
    },

    /// Dates and states differ in length.
    #[error("series length mismatch: {dates_len} dates vs {states_len} states")]
    LengthMismatch {
        /// Number of dates supplied.
        dates_len: usize,
        /// Number of states supplied.
        states_len: usize,
    },

    /// Output buffer length does not match the series length.
    #[error("buffer length mismatch: expected {expected}, got {got}")]
    BufferLengthMismatch {
        /// The series length.
        expected: usize,
        /// The actual buffer length.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_monthly_max_display() {
        let err = DepthError::InvalidMonthlyMax {
            month: 7,
            max_mm: 0.2,
        };
        assert_eq!(
            err.to_string(),
            "monthly maximum for month 7 is 0.2 mm; it must be finite and at least the wet-day threshold"
        );
    }

    #[test]
    fn length_mismatch_display() {
        let err = DepthError::LengthMismatch {
            dates_len: 10,
            states_len: 8,
        };
        assert_eq!(
            err.to_string(),
            "series length mismatch: 10 dates vs 8 states"
        );
    }

    #[test]
    fn buffer_length_mismatch_display() {
        let err = DepthError::BufferLengthMismatch {
            expected: 10,
            got: 7,
        };
        assert_eq!(
            err.to_string(),
            "buffer length mismatch: expected 10, got 7"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DepthError>();
    }
}
