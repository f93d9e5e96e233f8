//! Day-stepped alternator over wet and dry runs.

use notus_calendar::Date;
use notus_stream::{SamplerStream, StreamPurpose};

use crate::durations::MonthlySpells;
use crate::state::SpellState;

/// Alternating-renewal state machine driven one calendar day at a time.
///
/// The machine holds the current run's state and its remaining length.
/// When a run is exhausted it flips state and draws the next duration
/// from the table entry for the new state and the month the new run
/// starts in. A run that crosses a month boundary keeps its original
/// draw; durations are atomic.
///
/// Wet durations are drawn from the wet-selector stream and dry
/// durations from the dry-selector stream, so the two selectors stay
/// replayable independently of each other.
#[derive(Debug)]
pub struct SpellMachine {
    spells: MonthlySpells,
    wet_stream: SamplerStream,
    dry_stream: SamplerStream,
    state: SpellState,
    remaining: u32,
    started: bool,
}

impl SpellMachine {
    /// Creates a machine that begins in `initial` state.
    ///
    /// No duration is drawn until the first call to [`step`]; the first
    /// run's draw uses the month of the first stepped date.
    ///
    /// # Panics
    ///
    /// Panics if the streams do not carry the wet-selector and
    /// dry-selector purposes respectively.
    ///
    /// [`step`]: SpellMachine::step
    pub fn new(
        spells: MonthlySpells,
        initial: SpellState,
        wet_stream: SamplerStream,
        dry_stream: SamplerStream,
    ) -> Self {
        assert_eq!(
            wet_stream.purpose(),
            StreamPurpose::WetSelector,
            "wet durations must come from the wet-selector stream"
        );
        assert_eq!(
            dry_stream.purpose(),
            StreamPurpose::DrySelector,
            "dry durations must come from the dry-selector stream"
        );
        Self {
            spells,
            wet_stream,
            dry_stream,
            state: initial,
            remaining: 0,
            started: false,
        }
    }

    /// Advances the machine by one day and returns that day's state.
    ///
    /// Dates must be presented in calendar order; the machine only
    /// inspects the month of a date when it starts a new run. Stopping
    /// before a run is exhausted simply truncates it.
    pub fn step(&mut self, date: Date) -> SpellState {
        if self.remaining == 0 {
            if self.started {
                self.state = self.state.other();
            }
            self.started = true;
            self.remaining = self.draw_duration(date.month());
        }
        self.remaining -= 1;
        self.state
    }

    /// Days left in the current run, counting today as already emitted.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// The duration table the machine draws from.
    pub fn spells(&self) -> &MonthlySpells {
        &self.spells
    }

    fn draw_duration(&mut self, month: u8) -> u32 {
        let stream = match self.state {
            SpellState::Dry => &mut self.dry_stream,
            SpellState::Wet => &mut self.wet_stream,
        };
        self.spells.draw_duration(self.state, month, stream)
    }
}
