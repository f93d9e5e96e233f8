//! Negative binomial distribution for spell lengths.

use statrs::distribution::{DiscreteCDF, NegativeBinomial};

use crate::PROB_EPS;
use crate::error::DistError;

/// Validated negative binomial parameters with a location shift.
///
/// Spell-length calibrations use a real-valued successes count `n`, a
/// success probability `p`, and an additive `location` giving the minimum
/// spell length (dry spells are calibrated with location 2, wet spells
/// with location 1).
#[derive(Debug, Clone, Copy)]
pub struct NegBinom {
    n: f64,
    p: f64,
    location: f64,
    inner: NegativeBinomial,
}

impl PartialEq for NegBinom {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.p == other.p && self.location == other.location
    }
}

impl NegBinom {
    /// Creates a validated negative binomial.
    ///
    /// # Errors
    ///
    /// Returns [`DistError::InvalidSuccesses`] unless `n` is finite and in
    /// (0, 1000], [`DistError::InvalidProbability`] unless `p` is finite
    /// and in (0, 1], and [`DistError::InvalidLocation`] unless `location`
    /// is finite.
    pub fn new(n: f64, p: f64, location: f64) -> Result<Self, DistError> {
        if !n.is_finite() || n <= 0.0 || n > 1000.0 {
            return Err(DistError::InvalidSuccesses { n });
        }
        if !p.is_finite() || p <= 0.0 || p > 1.0 {
            return Err(DistError::InvalidProbability { p });
        }
        if !location.is_finite() {
            return Err(DistError::InvalidLocation { location });
        }
        let inner = NegativeBinomial::new(n, p).map_err(|e| DistError::Construction {
            family: "negative binomial",
            message: e.to_string(),
        })?;
        Ok(Self {
            n,
            p,
            location,
            inner,
        })
    }

    /// Successes count.
    pub fn n(&self) -> f64 {
        self.n
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Location shift (minimum value of the distribution).
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Distribution mean, `location + n (1 - p) / p`.
    pub fn mean(&self) -> f64 {
        self.location + self.n * (1.0 - self.p) / self.p
    }

    /// Maps a uniform value through the quantile function.
    ///
    /// Returns `location` plus the smallest count whose CDF reaches `u`;
    /// `u` is nudged off the exact endpoints first.
    pub fn quantile(&self, u: f64) -> f64 {
        let u = u.clamp(PROB_EPS, 1.0 - PROB_EPS);
        self.inner.inverse_cdf(u) as f64 + self.location
    }
}
