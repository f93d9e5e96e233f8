//! On-disk schema of per-basin calibration files.
//!
//! These structs mirror the TOML layout exactly; no invariants are
//! enforced here beyond what serde can express. [`crate::bundle`]
//! converts them into validated types.

use serde::Deserialize;

/// Whole-file schema of a basin calibration TOML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawBundle {
    /// Basin identity.
    pub basin: RawBasin,
    /// Simulation period boundaries.
    pub period: RawPeriod,
    /// Month-indexed spell-length parameters.
    pub spells: RawSpells,
    /// Month-indexed wet-day depth parameters.
    pub depth: RawDepth,
    /// Residual recursion matrices and temperature shifts.
    pub temperature: RawTemperature,
    /// Per-state day-of-year temperature tables.
    pub climatology: RawClimatologyPair,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawBasin {
    pub label: String,
    pub latitude_deg: f64,
}

/// ISO `YYYY-MM-DD` boundary dates, both inclusive.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPeriod {
    pub start: String,
    pub end: String,
}

/// Twelve `[n, p, location]` triples per state, January first.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSpells {
    pub dry: [[f64; 3]; 12],
    pub wet: [[f64; 3]; 12],
}

/// Twelve `[a, c, location, scale]` quadruples plus monthly caps.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDepth {
    pub params: [[f64; 4]; 12],
    pub monthly_max_mm: [f64; 12],
}

/// Row-major 2x2 matrices and the four additive state shifts.
///
/// `a` and `b` drive the residual recursion; `m0` and `m1` are the
/// lag-0/lag-1 moments the matrices were solved from, kept in the file
/// for consistency diagnostics.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTemperature {
    pub a: [[f64; 2]; 2],
    pub b: [[f64; 2]; 2],
    pub m0: [[f64; 2]; 2],
    pub m1: [[f64; 2]; 2],
    pub wet_tmax_add: f64,
    pub dry_tmax_add: f64,
    pub wet_tmin_add: f64,
    pub dry_tmin_add: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawClimatologyPair {
    pub wet: RawClimatology,
    pub dry: RawClimatology,
}

/// 366-entry day-of-year arrays; length is checked during conversion.
///
/// Tave tables are part of the calibration record even though the
/// generated average is always the Tmax/Tmin midpoint.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawClimatology {
    pub tmax_mean: Vec<f64>,
    pub tmin_mean: Vec<f64>,
    pub tave_mean: Vec<f64>,
    pub tmax_sd: Vec<f64>,
    pub tmin_sd: Vec<f64>,
    pub tave_sd: Vec<f64>,
}
