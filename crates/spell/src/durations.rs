//! Month-indexed spell-length distributions for both states.

use notus_dist::{Distribution, NegBinom};
use notus_stream::SamplerStream;

use crate::state::SpellState;

/// Twelve month-specific duration distributions per state (1-indexed months).
///
/// Index 0 corresponds to January, index 11 to December. Spell lengths
/// are negative-binomial by calibration, but the table stores them as
/// [`Distribution`] values so the draw path is the same tagged dispatch
/// used everywhere else.
#[derive(Debug, Clone)]
pub struct MonthlySpells {
    dry: [Distribution; 12],
    wet: [Distribution; 12],
}

impl MonthlySpells {
    /// Builds the table from per-month distributions for each state.
    pub fn new(dry: [NegBinom; 12], wet: [NegBinom; 12]) -> Self {
        Self {
            dry: dry.map(Distribution::from),
            wet: wet.map(Distribution::from),
        }
    }

    /// Returns the duration distribution for a run of `state` starting
    /// in a 1-indexed month.
    ///
    /// # Panics
    ///
    /// Panics if `month` is 0 or greater than 12.
    pub fn for_run(&self, state: SpellState, month: u8) -> &Distribution {
        assert!(
            (1..=12).contains(&month),
            "month must be 1..=12, got {month}"
        );
        let mi = (month - 1) as usize;
        match state {
            SpellState::Dry => &self.dry[mi],
            SpellState::Wet => &self.wet[mi],
        }
    }

    /// Draws one spell duration for a run of `state` starting in `month`.
    ///
    /// Consumes exactly one uniform from `stream`. The raw quantile is
    /// rounded to the nearest whole day and clamped to at least 1, so a
    /// run can never be empty.
    pub fn draw_duration(&self, state: SpellState, month: u8, stream: &mut SamplerStream) -> u32 {
        let raw = self.for_run(state, month).sample_one(stream);
        let days = raw.round().max(1.0);
        days as u32
    }

    /// Mean duration of a run of `state` starting in `month`, in days.
    pub fn mean_duration(&self, state: SpellState, month: u8) -> Option<f64> {
        self.for_run(state, month).mean()
    }
}
