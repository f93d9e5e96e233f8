//! Error types for the notus-temperature crate.

/// Error type for all fallible operations in the notus-temperature crate.
///
/// Coefficient and climatology validation happens once at model
/// construction; a model that validated successfully never fails while
/// stepping.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemperatureError {
    /// Returned when a coefficient matrix contains a non-finite entry.
    #[error("coefficient {matrix}[{row}][{col}] is not finite: {value}")]
    InvalidCoefficient {
        /// Which matrix failed validation ("a", "b", "m0" or "m1").
        matrix: &'static str,
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when the lag-0 moment matrix cannot be inverted.
    #[error("lag-0 moment matrix is singular")]
    SingularMoment,

    /// Returned when the implied shock covariance has no Cholesky factor.
    #[error("shock covariance matrix is not positive definite")]
    NotPositiveDefinite,

    /// Returned when a climatology table contains a non-finite entry.
    #[error("climatology table {table} has a non-finite value on day-of-year {doy}: {value}")]
    InvalidClimatology {
        /// Which table failed validation.
        table: &'static str,
        /// One-based day of year of the offending entry.
        doy: u16,
        /// The offending value.
        value: f64,
    },

    /// Returned when a spread table contains a negative entry.
    #[error("climatology table {table} has a negative spread on day-of-year {doy}: {value}")]
    NegativeSpread {
        /// Which table failed validation.
        table: &'static str,
        /// One-based day of year of the offending entry.
        doy: u16,
        /// The offending value.
        value: f64,
    },

    /// Returned when an additive state adjustment is not finite.
    #[error("state adjustment {name} is not finite: {value}")]
    InvalidAdjustment {
        /// Which adjustment failed validation.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}
