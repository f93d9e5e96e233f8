//! Bivariate daily temperature process conditioned on wet/dry state.
//!
//! This crate generates daily maximum and minimum temperature as a
//! per-state seasonal cycle plus a scaled anomaly. The anomaly pair
//! follows a lag-1 vector recursion, `r[t] = A * shock[t] + B * r[t-1]`,
//! with independent standard normal shocks, so day-to-day persistence
//! and the cross-correlation between the two variables both come from
//! the calibrated matrices rather than from the tables.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │ coefficients  │────▶│   residual     │────▶│     model        │
//!  │  (A and B)    │     │  (anomalies)   │     │ (tmax/tmin/tave) │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use notus_calendar::Date;
//! use notus_spell::SpellState;
//! use notus_stream::{SamplerStream, StreamPurpose};
//! use notus_temperature::{
//!     AdditiveAdjustments, ArCoefficients, ClimatologySet, DoyTable, StateClimatology,
//!     TemperatureModel,
//! };
//!
//! let coefficients = ArCoefficients::new(
//!     [[0.73, 0.0], [0.26, 0.68]],
//!     [[0.54, 0.22], [-0.03, 0.70]],
//! )?;
//! let state = |mean_tmax: f64, mean_tmin: f64| {
//!     StateClimatology::new(
//!         DoyTable::new([mean_tmax; 366]),
//!         DoyTable::new([mean_tmin; 366]),
//!         DoyTable::new([(mean_tmax + mean_tmin) / 2.0; 366]),
//!         DoyTable::new([2.5; 366]),
//!         DoyTable::new([2.0; 366]),
//!         DoyTable::new([2.2; 366]),
//!     )
//! };
//! let mut model = TemperatureModel::new(
//!     coefficients,
//!     ClimatologySet::new(state(18.0, 8.0), state(24.0, 10.0))?,
//!     AdditiveAdjustments::none(),
//!     SamplerStream::seeded(StreamPurpose::Residual, 42),
//! );
//!
//! let day = model.step(Date::new(2024, 7, 1)?, SpellState::Dry);
//! assert_eq!(day.tave, (day.tmax + day.tmin) / 2.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod climatology;
pub mod coefficients;
pub mod error;
mod linalg;
pub mod model;
pub mod residual;

pub use climatology::{AdditiveAdjustments, ClimatologySet, DoyTable, StateClimatology};
pub use coefficients::ArCoefficients;
pub use error::TemperatureError;
pub use model::{TemperatureModel, Temperatures};
pub use residual::{ResidualState, Shock};
