//! Day-by-day generation loop.

use tracing::{debug, info};

use notus_calendar::{Date, date_range_inclusive};
use notus_calib::CalibrationBundle;
use notus_depth::DepthTables;
use notus_spell::SpellMachine;
use notus_stream::{SamplerStream, StreamPurpose, StreamSeeds};
use notus_temperature::TemperatureModel;

use crate::config::EngineConfig;
use crate::record::DayRecord;
use crate::result::WeatherSeries;

/// The assembled generator for one simulation run.
///
/// Construction resolves the run's seeds and wires one stream to each
/// stochastic component; [`run`] then walks the bundle's calendar
/// period exactly once. An engine is consumed by its run, so replaying
/// a series means building a fresh engine with the same seeds.
///
/// [`run`]: WeatherEngine::run
#[derive(Debug)]
pub struct WeatherEngine {
    start: Date,
    end: Date,
    seeds: StreamSeeds,
    machine: SpellMachine,
    depths: DepthTables,
    depth_stream: SamplerStream,
    temperature: TemperatureModel,
}

impl WeatherEngine {
    /// Assembles an engine from a validated bundle and a run
    /// configuration.
    ///
    /// The bundle guarantees well-formed tables and a non-inverted
    /// period, so assembly cannot fail.
    pub fn new(bundle: &CalibrationBundle, config: EngineConfig) -> Self {
        let seeds = config.seed_mode().resolve();
        let machine = SpellMachine::new(
            bundle.spells().clone(),
            config.initial_state(),
            seeds.stream(StreamPurpose::WetSelector),
            seeds.stream(StreamPurpose::DrySelector),
        );
        let temperature = TemperatureModel::new(
            bundle.coefficients(),
            bundle.climatology().clone(),
            bundle.adjustments(),
            seeds.stream(StreamPurpose::Residual),
        );
        debug!(
            start = %bundle.start(),
            end = %bundle.end(),
            initial_state = config.initial_state().label(),
            "engine assembled"
        );
        Self {
            start: bundle.start(),
            end: bundle.end(),
            seeds,
            machine,
            depths: bundle.depths().clone(),
            depth_stream: seeds.stream(StreamPurpose::Depth),
            temperature,
        }
    }

    /// Returns the per-purpose seeds this engine will run with.
    pub fn seeds(&self) -> StreamSeeds {
        self.seeds
    }

    /// Generates the full series, one record per day of the bundle's
    /// period, start and end inclusive.
    ///
    /// Wet days consume exactly one depth draw; dry days carry exactly
    /// `0.0` mm and leave the depth stream untouched. Every day
    /// consumes two residual shocks. The final spell is truncated at
    /// the end date, never redrawn.
    pub fn run(mut self) -> WeatherSeries {
        let dates = date_range_inclusive(self.start, self.end);
        let mut records = Vec::with_capacity(dates.len());
        for date in dates {
            let state = self.machine.step(date);
            let precip_mm = if state.is_wet() {
                self.depths.draw(date.month(), &mut self.depth_stream)
            } else {
                0.0
            };
            let temps = self.temperature.step(date, state);
            records.push(DayRecord {
                date,
                state,
                precip_mm,
                tmax_c: temps.tmax,
                tmin_c: temps.tmin,
                tave_c: temps.tave,
            });
            if date.month() == 12 && date.day() == 31 {
                debug!(year = date.year(), days = records.len(), "simulated through year end");
            }
        }
        let series = WeatherSeries::new(self.seeds, records);
        info!(
            days = series.len(),
            wet_days = series.wet_days(),
            total_precip_mm = series.total_precip_mm(),
            "generation finished"
        );
        series
    }
}
