//! Error types for the notus-dist crate.

/// Error type for all fallible operations in the notus-dist crate.
///
/// Every variant is a permanent construction failure: a distribution that
/// validated successfully can never fail to sample.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistError {
    /// Returned when the negative binomial successes count is outside (0, 1000].
    #[error("invalid successes count: {n} (must be in (0, 1000])")]
    InvalidSuccesses {
        /// The invalid successes count.
        n: f64,
    },

    /// Returned when the negative binomial success probability is outside (0, 1].
    #[error("invalid success probability: {p} (must be in (0, 1])")]
    InvalidProbability {
        /// The invalid probability value.
        p: f64,
    },

    /// Returned when the generalized gamma shape is not finite and positive.
    #[error("invalid gamma shape: {a} (must be finite and > 0)")]
    InvalidShape {
        /// The invalid shape value.
        a: f64,
    },

    /// Returned when the generalized gamma power parameter is zero or non-finite.
    #[error("invalid gamma power: {c} (must be finite and nonzero)")]
    InvalidPower {
        /// The invalid power value.
        c: f64,
    },

    /// Returned when a scale parameter is not finite and positive.
    #[error("invalid scale: {scale} (must be finite and > 0)")]
    InvalidScale {
        /// The invalid scale value.
        scale: f64,
    },

    /// Returned when a location parameter is not finite.
    #[error("invalid location: {location} (must be finite)")]
    InvalidLocation {
        /// The invalid location value.
        location: f64,
    },

    /// Returned when the backing distribution library rejects parameters
    /// that passed local validation.
    #[error("failed to construct {family} distribution: {message}")]
    Construction {
        /// Distribution family name.
        family: &'static str,
        /// Library error description.
        message: String,
    },
}
