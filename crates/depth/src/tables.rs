//! Month-indexed depth distributions and physical bounds.

use notus_dist::{Distribution, Gamma2P};
use notus_stream::SamplerStream;
use tracing::trace;

use crate::error::DepthError;

/// Smallest depth recorded on a wet day, in millimetres.
///
/// Calibration treats anything below a quarter millimetre as trace
/// precipitation; draws under this value are raised to it rather than
/// re-sampled.
pub const WET_DAY_THRESHOLD_MM: f64 = 0.255;

/// Twelve month-specific depth distributions with their caps
/// (1-indexed months).
///
/// Index 0 corresponds to January, index 11 to December. Each month
/// carries the historical maximum daily depth; draws above it are
/// capped, not re-sampled, so the depth stream advances exactly once
/// per wet day regardless of the draw.
#[derive(Debug, Clone)]
pub struct DepthTables {
    dists: [Distribution; 12],
    max_mm: [f64; 12],
}

impl DepthTables {
    /// Builds the table from per-month distributions and maxima.
    ///
    /// # Errors
    ///
    /// Returns [`DepthError::InvalidMonthlyMax`] if any monthly maximum
    /// is not finite or lies below [`WET_DAY_THRESHOLD_MM`]; a cap
    /// under the trace threshold would make the clip bounds cross.
    pub fn new(dists: [Gamma2P; 12], max_mm: [f64; 12]) -> Result<Self, DepthError> {
        for (i, &max) in max_mm.iter().enumerate() {
            if !max.is_finite() || max < WET_DAY_THRESHOLD_MM {
                return Err(DepthError::InvalidMonthlyMax {
                    month: (i + 1) as u8,
                    max_mm: max,
                });
            }
        }
        Ok(Self {
            dists: dists.map(Distribution::from),
            max_mm,
        })
    }

    /// Returns the depth distribution for a 1-indexed month.
    ///
    /// # Panics
    ///
    /// Panics if `month` is 0 or greater than 12.
    pub fn for_month(&self, month: u8) -> &Distribution {
        assert!(
            (1..=12).contains(&month),
            "month must be 1..=12, got {month}"
        );
        &self.dists[(month - 1) as usize]
    }

    /// Returns the maximum daily depth for a 1-indexed month, in mm.
    ///
    /// # Panics
    ///
    /// Panics if `month` is 0 or greater than 12.
    pub fn max_for_month(&self, month: u8) -> f64 {
        assert!(
            (1..=12).contains(&month),
            "month must be 1..=12, got {month}"
        );
        self.max_mm[(month - 1) as usize]
    }

    /// Draws one wet-day depth for `month`, in mm.
    ///
    /// Consumes exactly one uniform from `stream` and clips the result
    /// to `[WET_DAY_THRESHOLD_MM, max_for_month(month)]`.
    pub fn draw(&self, month: u8, stream: &mut SamplerStream) -> f64 {
        let raw = self.for_month(month).sample_one(stream);
        let depth = raw.clamp(WET_DAY_THRESHOLD_MM, self.max_for_month(month));
        if depth != raw {
            trace!(month, raw, depth, "depth clipped to monthly bounds");
        }
        depth
    }
}

#[cfg(test)]
mod tests {
    use notus_stream::StreamPurpose;

    use super::*;

    fn uniform_tables(dist: Gamma2P, max_mm: f64) -> DepthTables {
        DepthTables::new([dist; 12], [max_mm; 12]).unwrap()
    }

    #[test]
    fn rejects_max_below_threshold() {
        let dist = Gamma2P::new(0.93, 0.79, 0.255, 6.9).unwrap();
        let mut max_mm = [30.0; 12];
        max_mm[6] = 0.2; // July cap under the trace threshold
        let result = DepthTables::new([dist; 12], max_mm);
        assert_eq!(
            result.err(),
            Some(DepthError::InvalidMonthlyMax {
                month: 7,
                max_mm: 0.2
            })
        );
    }

    #[test]
    fn rejects_non_finite_max() {
        let dist = Gamma2P::new(0.93, 0.79, 0.255, 6.9).unwrap();
        let mut max_mm = [30.0; 12];
        max_mm[0] = f64::NAN;
        assert!(matches!(
            DepthTables::new([dist; 12], max_mm),
            Err(DepthError::InvalidMonthlyMax { month: 1, .. })
        ));
    }

    #[test]
    fn threshold_itself_is_a_valid_cap() {
        let dist = Gamma2P::new(0.93, 0.79, 0.255, 6.9).unwrap();
        let tables = uniform_tables(dist, WET_DAY_THRESHOLD_MM);
        let mut stream = SamplerStream::seeded(StreamPurpose::Depth, 42);
        // A cap equal to the threshold pins every draw.
        for _ in 0..50 {
            assert_eq!(tables.draw(1, &mut stream), WET_DAY_THRESHOLD_MM);
        }
    }

    #[test]
    fn all_months_accessible() {
        let dist = Gamma2P::new(0.93, 0.79, 0.255, 6.9).unwrap();
        let tables = uniform_tables(dist, 30.9);
        for m in 1..=12u8 {
            let _ = tables.for_month(m);
            assert_eq!(tables.max_for_month(m), 30.9);
        }
    }

    #[test]
    fn draws_stay_within_bounds() {
        let dist = Gamma2P::new(0.93, 0.79, 0.255, 6.9).unwrap();
        let tables = uniform_tables(dist, 30.9);
        let mut stream = SamplerStream::seeded(StreamPurpose::Depth, 42);
        for _ in 0..5000 {
            let d = tables.draw(5, &mut stream);
            assert!(
                (WET_DAY_THRESHOLD_MM..=30.9).contains(&d),
                "depth {d} escaped the monthly bounds"
            );
        }
    }

    #[test]
    fn oversized_draws_are_capped_exactly() {
        // A huge scale pushes nearly every draw past a tight cap.
        let dist = Gamma2P::new(2.0, 1.0, 0.255, 1000.0).unwrap();
        let tables = uniform_tables(dist, 5.0);
        let mut stream = SamplerStream::seeded(StreamPurpose::Depth, 7);
        let mut capped = 0;
        for _ in 0..200 {
            let d = tables.draw(1, &mut stream);
            assert!(d <= 5.0);
            if d == 5.0 {
                capped += 1;
            }
        }
        assert!(capped > 150, "expected most draws to hit the cap, got {capped}");
    }

    #[test]
    fn undersized_draws_are_raised_exactly() {
        // A tiny scale with no location puts nearly all mass below the
        // trace threshold.
        let dist = Gamma2P::new(1.0, 1.0, 0.0, 1e-6).unwrap();
        let tables = uniform_tables(dist, 30.0);
        let mut stream = SamplerStream::seeded(StreamPurpose::Depth, 11);
        for _ in 0..200 {
            assert_eq!(tables.draw(1, &mut stream), WET_DAY_THRESHOLD_MM);
        }
    }

    #[test]
    fn draw_consumes_one_uniform() {
        let dist = Gamma2P::new(0.93, 0.79, 0.255, 6.9).unwrap();
        let tables = uniform_tables(dist, 30.9);

        let mut used = SamplerStream::seeded(StreamPurpose::Depth, 3);
        let mut reference = SamplerStream::seeded(StreamPurpose::Depth, 3);

        tables.draw(2, &mut used);
        reference.next_uniform();

        assert_eq!(
            used.next_uniform().to_bits(),
            reference.next_uniform().to_bits()
        );
    }

    #[test]
    fn monthly_maxima_are_honored() {
        let dist = Gamma2P::new(2.0, 1.0, 0.255, 50.0).unwrap();
        let mut max_mm = [200.0; 12];
        max_mm[9] = 10.0; // October cap
        let tables = DepthTables::new([dist; 12], max_mm).unwrap();

        let mut stream = SamplerStream::seeded(StreamPurpose::Depth, 42);
        for _ in 0..500 {
            assert!(tables.draw(10, &mut stream) <= 10.0);
        }
    }
}
