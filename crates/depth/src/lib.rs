//! Wet-day precipitation depth generation.
//!
//! Each day classified wet draws one depth from the generalised-gamma
//! distribution calibrated for its calendar month, then clips it to
//! the month's physical bounds: at least the trace threshold of
//! 0.255 mm, at most the historical monthly maximum. Clipping replaces
//! re-sampling deliberately, so one wet day always costs exactly one
//! uniform draw and the series stays replayable.
//!
//! Dry days carry a depth of exactly `0.0` and never touch the depth
//! stream.
//!
//! # Quick start
//!
//! ```rust
//! use notus_calendar::{Date, date_sequence};
//! use notus_dist::Gamma2P;
//! use notus_depth::{DepthTables, generate_depths};
//! use notus_spell::SpellState;
//! use notus_stream::{SamplerStream, StreamPurpose};
//!
//! let dist = Gamma2P::new(0.93, 0.79, 0.255, 6.9)?;
//! let tables = DepthTables::new([dist; 12], [30.9; 12])?;
//!
//! let dates = date_sequence(Date::new(2024, 1, 1)?, 4);
//! let states = [
//!     SpellState::Dry,
//!     SpellState::Wet,
//!     SpellState::Wet,
//!     SpellState::Dry,
//! ];
//! let mut stream = SamplerStream::seeded(StreamPurpose::Depth, 42);
//!
//! let depths = generate_depths(&tables, &dates, &states, &mut stream)?;
//! assert_eq!(depths[0], 0.0);
//! assert!(depths[1] >= 0.255);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod generate;
pub mod tables;

pub use error::DepthError;
pub use generate::{generate_depths, generate_depths_into};
pub use tables::{DepthTables, WET_DAY_THRESHOLD_MM};
