//! Output series of a simulation run.

use notus_stream::StreamSeeds;

use crate::record::DayRecord;

/// The complete output of one simulation run.
///
/// Holds every generated day in calendar order together with the
/// seeds the run actually used, so a series remains reproducible even
/// when its seeds came from OS entropy.
#[derive(Debug, Clone)]
pub struct WeatherSeries {
    seeds: StreamSeeds,
    records: Vec<DayRecord>,
}

impl WeatherSeries {
    pub(crate) fn new(seeds: StreamSeeds, records: Vec<DayRecord>) -> Self {
        Self { seeds, records }
    }

    /// Returns the generated days in calendar order.
    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    /// Consumes the series and returns the records.
    pub fn into_records(self) -> Vec<DayRecord> {
        self.records
    }

    /// Returns the per-purpose seeds the run used.
    pub fn seeds(&self) -> StreamSeeds {
        self.seeds
    }

    /// Returns the number of generated days.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the series holds no days.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of days classified wet.
    pub fn wet_days(&self) -> usize {
        self.records.iter().filter(|r| r.state.is_wet()).count()
    }

    /// Returns the fraction of days classified wet.
    ///
    /// An empty series has a wet fraction of `0.0`.
    pub fn wet_fraction(&self) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            self.wet_days() as f64 / self.records.len() as f64
        }
    }

    /// Returns the total precipitation over the series, in mm.
    pub fn total_precip_mm(&self) -> f64 {
        self.records.iter().map(|r| r.precip_mm).sum()
    }

    /// Returns the largest single-day precipitation, in mm.
    pub fn max_precip_mm(&self) -> f64 {
        self.records.iter().map(|r| r.precip_mm).fold(0.0, f64::max)
    }

    /// Returns the mean daily maximum temperature, or `None` for an
    /// empty series.
    pub fn mean_tmax_c(&self) -> Option<f64> {
        self.mean_of(|r| r.tmax_c)
    }

    /// Returns the mean daily minimum temperature, or `None` for an
    /// empty series.
    pub fn mean_tmin_c(&self) -> Option<f64> {
        self.mean_of(|r| r.tmin_c)
    }

    fn mean_of(&self, value: impl Fn(&DayRecord) -> f64) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let sum: f64 = self.records.iter().map(value).sum();
        Some(sum / self.records.len() as f64)
    }
}
