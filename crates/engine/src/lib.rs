//! # notus-engine
//!
//! The day-by-day weather generation loop.
//!
//! The engine wires one seeded stream to each stochastic component and
//! walks the calendar of the bundle's period exactly once:
//!
//! ```text
//!                 +-> spell machine -> wet/dry state
//! calendar day ---+-> depth tables  -> precipitation (wet days only)
//!                 +-> temperature   -> Tmax / Tmin / Tave
//! ```
//!
//! Each day depends on accumulated state (the current spell run,
//! yesterday's anomaly), so a run is one sequential forward pass.
//! Nothing is shared between runs; simulating several basins or
//! replicates in parallel means one engine each.
//!
//! ## Quick Start
//!
//! ```no_run
//! use notus_calib::CalibrationBundle;
//! use notus_engine::{EngineConfig, WeatherEngine};
//!
//! let bundle = CalibrationBundle::from_path("basins/blanco.toml")?;
//! let config = EngineConfig::new().with_master_seed(42);
//! let series = WeatherEngine::new(&bundle, config).run();
//! println!("{} days, {:.1}% wet", series.len(), 100.0 * series.wet_fraction());
//! # Ok::<(), notus_calib::CalibError>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Run configuration builder |
//! | `engine` | The simulation loop |
//! | `record` | One simulated day |
//! | `result` | The output series |

pub mod config;
pub mod engine;
pub mod record;
pub mod result;

pub use config::{EngineConfig, SeedMode};
pub use engine::WeatherEngine;
pub use record::DayRecord;
pub use result::WeatherSeries;
