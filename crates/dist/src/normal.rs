//! Normal distribution with location and scale, used for the
//! autoregressive temperature shocks.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::PROB_EPS;
use crate::error::DistError;

/// Normal distribution parameterised by location (mean) and scale
/// (standard deviation).
///
/// The temperature component draws standard-normal shocks, so
/// [`StdNormal::standard`] is the common entry point; the general
/// constructor exists for calibration files that centre or widen the
/// shock distribution.
#[derive(Debug, Clone, Copy)]
pub struct StdNormal {
    location: f64,
    scale: f64,
    inner: Normal,
}

impl PartialEq for StdNormal {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location && self.scale == other.scale
    }
}

impl StdNormal {
    /// Creates a normal distribution with the given location and scale.
    ///
    /// # Errors
    ///
    /// Returns [`DistError::InvalidScale`] if `scale` is not a finite
    /// positive number, or [`DistError::InvalidLocation`] if `location`
    /// is not finite.
    pub fn new(location: f64, scale: f64) -> Result<Self, DistError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(DistError::InvalidScale { scale });
        }
        if !location.is_finite() {
            return Err(DistError::InvalidLocation { location });
        }
        let inner = Normal::new(location, scale).map_err(|e| DistError::Construction {
            family: "normal",
            message: e.to_string(),
        })?;
        Ok(Self {
            location,
            scale,
            inner,
        })
    }

    /// The standard normal distribution (location 0, scale 1).
    pub fn standard() -> Self {
        // Unit parameters always satisfy the constructor's checks.
        Self::new(0.0, 1.0).expect("standard normal parameters are valid")
    }

    /// Location (mean) parameter.
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale (standard deviation) parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Mean of the distribution.
    pub fn mean(&self) -> f64 {
        self.location
    }

    /// Maps a uniform draw through the inverse CDF.
    ///
    /// The input is clamped away from 0 and 1 so the tails stay finite.
    pub fn quantile(&self, u: f64) -> f64 {
        let u = u.clamp(PROB_EPS, 1.0 - PROB_EPS);
        self.inner.inverse_cdf(u)
    }
}
