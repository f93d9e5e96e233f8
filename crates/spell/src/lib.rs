//! Alternating wet/dry spell process for daily precipitation occurrence.
//!
//! This crate models occurrence as an alternating-renewal process:
//! maximal runs of wet or dry days whose lengths are drawn from
//! month-indexed negative-binomial distributions. A run's length is a
//! single atomic draw made with the month the run starts in, so runs
//! cross month boundaries without being re-sampled.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  durations    │────▶│   machine      │────▶│    simulate      │
//!  │  (tables)     │     │  (alternate)   │     │  (state series)  │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use notus_calendar::{Date, date_sequence};
//! use notus_dist::NegBinom;
//! use notus_spell::{MonthlySpells, SpellMachine, SpellState, simulate_states};
//! use notus_stream::{SamplerStream, StreamPurpose};
//!
//! let spell = NegBinom::new(2.0, 0.4, 1.0)?;
//! let mut machine = SpellMachine::new(
//!     MonthlySpells::new([spell; 12], [spell; 12]),
//!     SpellState::Dry,
//!     SamplerStream::seeded(StreamPurpose::WetSelector, 1),
//!     SamplerStream::seeded(StreamPurpose::DrySelector, 2),
//! );
//!
//! let dates = date_sequence(Date::new(2024, 1, 1)?, 365);
//! let states = simulate_states(&mut machine, &dates);
//! assert_eq!(states.len(), 365);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod durations;
pub mod error;
pub mod machine;
pub mod simulate;
pub mod state;

pub use durations::MonthlySpells;
pub use error::SpellError;
pub use machine::SpellMachine;
pub use simulate::{simulate_states, simulate_states_into};
pub use state::SpellState;
