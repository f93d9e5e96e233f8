//! Typed calibration bundle and its loading path.

use std::fs;
use std::path::Path;

use tracing::debug;

use notus_calendar::Date;
use notus_depth::DepthTables;
use notus_dist::{Gamma2P, NegBinom};
use notus_spell::MonthlySpells;
use notus_temperature::{
    AdditiveAdjustments, ArCoefficients, ClimatologySet, DoyTable, StateClimatology,
};

use crate::error::CalibError;
use crate::raw::{RawBundle, RawClimatology};

/// Everything the engine needs to simulate one basin, fully validated.
///
/// A bundle is a plain value: loading happens once, every distribution
/// and table is constructed eagerly, and simulation never touches the
/// file again. Cloning a bundle is cheap enough to build several
/// engines from the same calibration.
#[derive(Debug, Clone)]
pub struct CalibrationBundle {
    label: String,
    latitude_deg: f64,
    start: Date,
    end: Date,
    spells: MonthlySpells,
    depths: DepthTables,
    coefficients: ArCoefficients,
    stored_m0: [[f64; 2]; 2],
    stored_m1: [[f64; 2]; 2],
    adjustments: AdditiveAdjustments,
    climatology: ClimatologySet,
}

impl CalibrationBundle {
    /// Loads and validates a bundle from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CalibError::Read`] if the file cannot be read, and
    /// otherwise whatever [`from_toml_str`] returns.
    ///
    /// [`from_toml_str`]: CalibrationBundle::from_toml_str
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CalibError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| CalibError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let bundle = Self::from_toml_str(&text)?;
        debug!(basin = %bundle.label, path = %path.display(), "loaded calibration bundle");
        Ok(bundle)
    }

    /// Parses and validates a bundle from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CalibError> {
        let raw: RawBundle = toml::from_str(text)?;
        Self::from_raw(raw)
    }

    /// Converts the raw schema into a validated bundle.
    ///
    /// Validation is fail-fast and runs in file order: basin identity,
    /// period, spell tables, depth tables, then the temperature block.
    pub fn from_raw(raw: RawBundle) -> Result<Self, CalibError> {
        if raw.basin.label.trim().is_empty() {
            return Err(CalibError::EmptyLabel);
        }
        if !raw.basin.latitude_deg.is_finite() || raw.basin.latitude_deg.abs() > 90.0 {
            return Err(CalibError::InvalidLatitude {
                value: raw.basin.latitude_deg,
            });
        }

        let start: Date = raw.period.start.parse::<Date>().map_err(|e| CalibError::Period {
            field: "start",
            reason: e.to_string(),
        })?;
        let end: Date = raw.period.end.parse::<Date>().map_err(|e| CalibError::Period {
            field: "end",
            reason: e.to_string(),
        })?;
        if end < start {
            return Err(CalibError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let dry = spell_table("dry", raw.spells.dry)?;
        let wet = spell_table("wet", raw.spells.wet)?;
        let spells = MonthlySpells::new(dry, wet);

        let mut depth_dists = Vec::with_capacity(12);
        for (i, [a, c, location, scale]) in raw.depth.params.into_iter().enumerate() {
            let dist = Gamma2P::new(a, c, location, scale).map_err(|e| CalibError::Depth {
                month: i as u8 + 1,
                reason: e.to_string(),
            })?;
            depth_dists.push(dist);
        }
        let depths = DepthTables::new(twelve(depth_dists), raw.depth.monthly_max_mm)
            .map_err(|e| CalibError::DepthTable {
                reason: e.to_string(),
            })?;

        let coefficients = ArCoefficients::new(raw.temperature.a, raw.temperature.b)?;
        // The stored moments must themselves solve to a valid pair,
        // otherwise the consistency diagnostics would be meaningless.
        ArCoefficients::from_moments(raw.temperature.m0, raw.temperature.m1).map_err(|e| {
            CalibError::Temperature {
                reason: format!("stored moments: {e}"),
            }
        })?;
        let adjustments = AdditiveAdjustments::new(
            raw.temperature.wet_tmax_add,
            raw.temperature.dry_tmax_add,
            raw.temperature.wet_tmin_add,
            raw.temperature.dry_tmin_add,
        )?;
        let climatology = ClimatologySet::new(
            state_climatology(WET_TABLE_NAMES, raw.climatology.wet)?,
            state_climatology(DRY_TABLE_NAMES, raw.climatology.dry)?,
        )?;

        Ok(Self {
            label: raw.basin.label,
            latitude_deg: raw.basin.latitude_deg,
            start,
            end,
            spells,
            depths,
            coefficients,
            stored_m0: raw.temperature.m0,
            stored_m1: raw.temperature.m1,
            adjustments,
            climatology,
        })
    }

    /// Basin label, used to name output files.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Basin latitude in degrees, metadata only.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// First simulated date.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last simulated date, inclusive.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Month-indexed spell-length tables.
    pub fn spells(&self) -> &MonthlySpells {
        &self.spells
    }

    /// Month-indexed depth tables with their caps.
    pub fn depths(&self) -> &DepthTables {
        &self.depths
    }

    /// Residual recursion coefficients.
    pub fn coefficients(&self) -> ArCoefficients {
        self.coefficients
    }

    /// The lag-0 and lag-1 moment matrices as stored in the file.
    pub fn stored_moments(&self) -> ([[f64; 2]; 2], [[f64; 2]; 2]) {
        (self.stored_m0, self.stored_m1)
    }

    /// Per-state additive temperature shifts.
    pub fn adjustments(&self) -> AdditiveAdjustments {
        self.adjustments
    }

    /// Per-state day-of-year climatology tables.
    pub fn climatology(&self) -> &ClimatologySet {
        &self.climatology
    }
}

const WET_TABLE_NAMES: [&str; 6] = [
    "wet tmax_mean",
    "wet tmin_mean",
    "wet tave_mean",
    "wet tmax_sd",
    "wet tmin_sd",
    "wet tave_sd",
];
const DRY_TABLE_NAMES: [&str; 6] = [
    "dry tmax_mean",
    "dry tmin_mean",
    "dry tave_mean",
    "dry tmax_sd",
    "dry tmin_sd",
    "dry tave_sd",
];

fn spell_table(
    state: &'static str,
    rows: [[f64; 3]; 12],
) -> Result<[NegBinom; 12], CalibError> {
    let mut out = Vec::with_capacity(12);
    for (i, [n, p, location]) in rows.into_iter().enumerate() {
        let dist = NegBinom::new(n, p, location).map_err(|e| CalibError::Spell {
            state,
            month: i as u8 + 1,
            reason: e.to_string(),
        })?;
        out.push(dist);
    }
    Ok(twelve(out))
}

fn state_climatology(
    names: [&'static str; 6],
    raw: RawClimatology,
) -> Result<StateClimatology, CalibError> {
    Ok(StateClimatology::new(
        doy_table(names[0], raw.tmax_mean)?,
        doy_table(names[1], raw.tmin_mean)?,
        doy_table(names[2], raw.tave_mean)?,
        doy_table(names[3], raw.tmax_sd)?,
        doy_table(names[4], raw.tmin_sd)?,
        doy_table(names[5], raw.tave_sd)?,
    ))
}

fn doy_table(table: &'static str, values: Vec<f64>) -> Result<DoyTable, CalibError> {
    let array: [f64; DoyTable::LEN] =
        values.try_into().map_err(|v: Vec<f64>| CalibError::TableLength {
            table,
            expected: DoyTable::LEN,
            got: v.len(),
        })?;
    Ok(DoyTable::new(array))
}

fn twelve<T>(items: Vec<T>) -> [T; 12] {
    match items.try_into() {
        Ok(array) => array,
        Err(_) => unreachable!("callers collect exactly twelve entries"),
    }
}
