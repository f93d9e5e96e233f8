//! Per-basin calibration bundles: schema, loading, validation.
//!
//! A basin ships as one TOML file holding everything its generator
//! needs: spell-length parameters, depth parameters with caps, the
//! residual recursion matrices, and day-of-year climatology tables.
//! This crate parses that file into [`CalibrationBundle`], constructing
//! every distribution and table eagerly so a bundle that loads is a
//! bundle that simulates.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │     raw       │────▶│    bundle      │────▶│  typed tables    │
//!  │ (TOML schema) │     │  (validation)  │     │ (spell/depth/ar) │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use notus_calib::CalibrationBundle;
//!
//! let bundle = CalibrationBundle::from_path("basins/blanco.toml")?;
//! println!(
//!     "{}: {} to {}",
//!     bundle.label(),
//!     bundle.start(),
//!     bundle.end()
//! );
//! # Ok::<(), notus_calib::CalibError>(())
//! ```

pub mod bundle;
pub mod error;
pub mod raw;

pub use bundle::CalibrationBundle;
pub use error::CalibError;
