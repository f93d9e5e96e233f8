//! Day-stepped temperature generator.

use notus_calendar::Date;
use notus_dist::{Distribution, StdNormal};
use notus_spell::SpellState;
use notus_stream::{SamplerStream, StreamPurpose};

use crate::climatology::{AdditiveAdjustments, ClimatologySet};
use crate::coefficients::ArCoefficients;
use crate::residual::{ResidualState, Shock};

/// One day's generated temperatures, degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperatures {
    /// Daily maximum.
    pub tmax: f64,
    /// Daily minimum.
    pub tmin: f64,
    /// Daily average, the midpoint of maximum and minimum.
    pub tave: f64,
}

/// Generates correlated daily maxima and minima around a per-state
/// seasonal cycle.
///
/// Each day the model draws a fresh pair of independent standard
/// normal shocks from its residual stream, pushes the anomaly pair
/// through the lag-1 recursion, and maps the updated anomaly onto
/// temperatures:
///
/// ```text
/// tmax = mean_tmax[state][doy] + shift_tmax[state] + sd_tmax[state][doy] * r.x
/// tmin = mean_tmin[state][doy] + shift_tmin[state] + sd_tmin[state][doy] * r.y
/// ```
///
/// The anomaly is dimensionless and shared across states; switching
/// between wet and dry days changes which tables scale it, not the
/// anomaly itself, so temperature stays continuous across spell
/// boundaries.
#[derive(Debug)]
pub struct TemperatureModel {
    coefficients: ArCoefficients,
    climatology: ClimatologySet,
    adjustments: AdditiveAdjustments,
    shock_dist: Distribution,
    residual: ResidualState,
    stream: SamplerStream,
}

impl TemperatureModel {
    /// Creates a model with the anomaly pair at rest.
    ///
    /// # Panics
    ///
    /// Panics if `stream` does not carry the residual purpose.
    pub fn new(
        coefficients: ArCoefficients,
        climatology: ClimatologySet,
        adjustments: AdditiveAdjustments,
        stream: SamplerStream,
    ) -> Self {
        assert_eq!(
            stream.purpose(),
            StreamPurpose::Residual,
            "temperature shocks must come from the residual stream"
        );
        Self {
            coefficients,
            climatology,
            adjustments,
            shock_dist: StdNormal::standard().into(),
            residual: ResidualState::zero(),
            stream,
        }
    }

    /// Advances the anomaly by one day and returns that day's
    /// temperatures.
    ///
    /// Consumes exactly two uniforms from the residual stream, the
    /// maximum-temperature shock first. The anomaly update happens
    /// before the tables are applied, so the returned temperatures
    /// already reflect today's shocks.
    pub fn step(&mut self, date: Date, state: SpellState) -> Temperatures {
        let x = self.shock_dist.sample_one(&mut self.stream);
        let y = self.shock_dist.sample_one(&mut self.stream);
        self.residual = self.coefficients.advance(self.residual, Shock::new(x, y));

        let doy = date.doy();
        let tables = self.climatology.for_state(state);
        let tmax = tables.mean_tmax().value_on(doy)
            + self.adjustments.tmax(state)
            + tables.sd_tmax().value_on(doy) * self.residual.x();
        let tmin = tables.mean_tmin().value_on(doy)
            + self.adjustments.tmin(state)
            + tables.sd_tmin().value_on(doy) * self.residual.y();

        Temperatures {
            tmax,
            tmin,
            tave: (tmax + tmin) / 2.0,
        }
    }

    /// The current anomaly pair.
    pub fn residual(&self) -> ResidualState {
        self.residual
    }

    /// The recursion coefficients the model advances with.
    pub fn coefficients(&self) -> &ArCoefficients {
        &self.coefficients
    }
}
