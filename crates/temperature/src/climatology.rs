//! Day-of-year climatology tables and per-state offsets.

use notus_calendar::Doy;
use notus_spell::SpellState;

use crate::error::TemperatureError;

/// One value per day of year.
///
/// Indexing follows the plain day-of-year count, so from March onward
/// the same calendar date lands one slot later in leap years, and the
/// 366th slot is only read in leap years. That matches how the tables
/// are fitted, which counts days the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct DoyTable {
    values: [f64; Self::LEN],
}

impl DoyTable {
    /// Number of slots in a table.
    pub const LEN: usize = 366;

    /// Wraps a full year of values.
    pub fn new(values: [f64; Self::LEN]) -> Self {
        Self { values }
    }

    /// The value for the given day of year.
    pub fn value_on(&self, doy: Doy) -> f64 {
        self.values[doy.index()]
    }

    /// All 366 values in day-of-year order.
    pub fn values(&self) -> &[f64; Self::LEN] {
        &self.values
    }
}

/// The seasonal cycle of one spell state: smoothed daily means and
/// spreads for maximum, minimum, and average temperature.
///
/// Generation only scales anomalies by the Tmax and Tmin tables; the
/// Tave tables ride along for calibration diagnostics, since the
/// generated average is always the Tmax/Tmin midpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct StateClimatology {
    mean_tmax: DoyTable,
    mean_tmin: DoyTable,
    mean_tave: DoyTable,
    sd_tmax: DoyTable,
    sd_tmin: DoyTable,
    sd_tave: DoyTable,
}

impl StateClimatology {
    pub fn new(
        mean_tmax: DoyTable,
        mean_tmin: DoyTable,
        mean_tave: DoyTable,
        sd_tmax: DoyTable,
        sd_tmin: DoyTable,
        sd_tave: DoyTable,
    ) -> Self {
        Self {
            mean_tmax,
            mean_tmin,
            mean_tave,
            sd_tmax,
            sd_tmin,
            sd_tave,
        }
    }

    /// Daily mean of maximum temperature, degrees Celsius.
    pub fn mean_tmax(&self) -> &DoyTable {
        &self.mean_tmax
    }

    /// Daily mean of minimum temperature, degrees Celsius.
    pub fn mean_tmin(&self) -> &DoyTable {
        &self.mean_tmin
    }

    /// Daily mean of average temperature, degrees Celsius.
    pub fn mean_tave(&self) -> &DoyTable {
        &self.mean_tave
    }

    /// Daily standard deviation of maximum temperature.
    pub fn sd_tmax(&self) -> &DoyTable {
        &self.sd_tmax
    }

    /// Daily standard deviation of minimum temperature.
    pub fn sd_tmin(&self) -> &DoyTable {
        &self.sd_tmin
    }

    /// Daily standard deviation of average temperature.
    pub fn sd_tave(&self) -> &DoyTable {
        &self.sd_tave
    }
}

/// Fails on the first non-finite entry, or the first negative one when
/// the table is a spread.
fn check_table(
    table: &'static str,
    values: &DoyTable,
    spread: bool,
) -> Result<(), TemperatureError> {
    for (i, &value) in values.values().iter().enumerate() {
        let doy = (i + 1) as u16;
        if !value.is_finite() {
            return Err(TemperatureError::InvalidClimatology { table, doy, value });
        }
        if spread && value < 0.0 {
            return Err(TemperatureError::NegativeSpread { table, doy, value });
        }
    }
    Ok(())
}

/// Wet-day and dry-day climatologies, validated as a pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimatologySet {
    wet: StateClimatology,
    dry: StateClimatology,
}

impl ClimatologySet {
    /// Builds the pair, checking every table entry.
    ///
    /// # Errors
    ///
    /// Returns [`TemperatureError::InvalidClimatology`] on a non-finite
    /// entry and [`TemperatureError::NegativeSpread`] on a negative
    /// standard deviation, naming the table and day of year.
    pub fn new(wet: StateClimatology, dry: StateClimatology) -> Result<Self, TemperatureError> {
        check_table("wet mean tmax", &wet.mean_tmax, false)?;
        check_table("wet mean tmin", &wet.mean_tmin, false)?;
        check_table("wet mean tave", &wet.mean_tave, false)?;
        check_table("wet sd tmax", &wet.sd_tmax, true)?;
        check_table("wet sd tmin", &wet.sd_tmin, true)?;
        check_table("wet sd tave", &wet.sd_tave, true)?;
        check_table("dry mean tmax", &dry.mean_tmax, false)?;
        check_table("dry mean tmin", &dry.mean_tmin, false)?;
        check_table("dry mean tave", &dry.mean_tave, false)?;
        check_table("dry sd tmax", &dry.sd_tmax, true)?;
        check_table("dry sd tmin", &dry.sd_tmin, true)?;
        check_table("dry sd tave", &dry.sd_tave, true)?;
        Ok(Self { wet, dry })
    }

    /// The climatology of the given spell state.
    pub fn for_state(&self, state: SpellState) -> &StateClimatology {
        match state {
            SpellState::Wet => &self.wet,
            SpellState::Dry => &self.dry,
        }
    }
}

/// Flat per-state shifts applied on top of the daily means.
///
/// Calibration expresses scenario warming as one additive constant per
/// variable and spell state rather than editing the tables themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdditiveAdjustments {
    wet_tmax: f64,
    dry_tmax: f64,
    wet_tmin: f64,
    dry_tmin: f64,
}

impl AdditiveAdjustments {
    /// Builds the four shifts, rejecting non-finite values.
    ///
    /// # Errors
    ///
    /// Returns [`TemperatureError::InvalidAdjustment`] naming the
    /// offending shift.
    pub fn new(
        wet_tmax: f64,
        dry_tmax: f64,
        wet_tmin: f64,
        dry_tmin: f64,
    ) -> Result<Self, TemperatureError> {
        for (name, value) in [
            ("wet tmax", wet_tmax),
            ("dry tmax", dry_tmax),
            ("wet tmin", wet_tmin),
            ("dry tmin", dry_tmin),
        ] {
            if !value.is_finite() {
                return Err(TemperatureError::InvalidAdjustment { name, value });
            }
        }
        Ok(Self {
            wet_tmax,
            dry_tmax,
            wet_tmin,
            dry_tmin,
        })
    }

    /// No shift at all. Useful for baseline runs.
    pub fn none() -> Self {
        Self {
            wet_tmax: 0.0,
            dry_tmax: 0.0,
            wet_tmin: 0.0,
            dry_tmin: 0.0,
        }
    }

    /// The maximum-temperature shift for the given state.
    pub fn tmax(&self, state: SpellState) -> f64 {
        match state {
            SpellState::Wet => self.wet_tmax,
            SpellState::Dry => self.dry_tmax,
        }
    }

    /// The minimum-temperature shift for the given state.
    pub fn tmin(&self, state: SpellState) -> f64 {
        match state {
            SpellState::Wet => self.wet_tmin,
            SpellState::Dry => self.dry_tmin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(value: f64) -> DoyTable {
        DoyTable::new([value; DoyTable::LEN])
    }

    fn flat_state(mean: f64, sd: f64) -> StateClimatology {
        StateClimatology::new(
            flat(mean),
            flat(mean - 10.0),
            flat(mean - 5.0),
            flat(sd),
            flat(sd),
            flat(sd),
        )
    }

    #[test]
    fn table_maps_doy_to_slot() {
        let mut values = [0.0; DoyTable::LEN];
        values[0] = 1.5;
        values[59] = 2.5;
        values[365] = 3.5;
        let table = DoyTable::new(values);

        assert_eq!(table.value_on(Doy::new(1).unwrap()), 1.5);
        assert_eq!(table.value_on(Doy::new(60).unwrap()), 2.5);
        assert_eq!(table.value_on(Doy::new(366).unwrap()), 3.5);
    }

    #[test]
    fn set_rejects_non_finite_mean() {
        let mut values = [20.0; DoyTable::LEN];
        values[100] = f64::NAN;
        let wet = StateClimatology::new(
            flat(20.0),
            DoyTable::new(values),
            flat(15.0),
            flat(2.0),
            flat(2.0),
            flat(2.0),
        );
        let err = ClimatologySet::new(wet, flat_state(22.0, 2.5)).unwrap_err();
        assert!(matches!(
            err,
            TemperatureError::InvalidClimatology {
                table: "wet mean tmin",
                doy: 101,
                ..
            }
        ));
    }

    #[test]
    fn set_rejects_negative_spread() {
        let mut values = [2.0; DoyTable::LEN];
        values[0] = -0.5;
        let dry = StateClimatology::new(
            flat(22.0),
            flat(12.0),
            flat(17.0),
            flat(2.5),
            DoyTable::new(values),
            flat(2.5),
        );
        let err = ClimatologySet::new(flat_state(20.0, 2.0), dry).unwrap_err();
        assert!(matches!(
            err,
            TemperatureError::NegativeSpread {
                table: "dry sd tmin",
                doy: 1,
                ..
            }
        ));
    }

    #[test]
    fn zero_spread_is_allowed() {
        let set = ClimatologySet::new(flat_state(20.0, 0.0), flat_state(22.0, 0.0));
        assert!(set.is_ok());
    }

    #[test]
    fn for_state_selects_the_matching_tables() {
        let set = ClimatologySet::new(flat_state(18.0, 2.0), flat_state(24.0, 3.0)).unwrap();
        let doy = Doy::new(150).unwrap();

        assert_eq!(set.for_state(SpellState::Wet).mean_tmax().value_on(doy), 18.0);
        assert_eq!(set.for_state(SpellState::Dry).mean_tmax().value_on(doy), 24.0);
        assert_eq!(set.for_state(SpellState::Dry).sd_tmax().value_on(doy), 3.0);
        assert_eq!(set.for_state(SpellState::Wet).mean_tave().value_on(doy), 13.0);
    }

    #[test]
    fn adjustments_reject_non_finite_values() {
        let err = AdditiveAdjustments::new(1.0, f64::INFINITY, 0.5, 0.5).unwrap_err();
        assert!(matches!(
            err,
            TemperatureError::InvalidAdjustment { name: "dry tmax", .. }
        ));
    }

    #[test]
    fn adjustments_select_by_state() {
        let adds = AdditiveAdjustments::new(5.79, 6.0, 2.14, 2.13).unwrap();
        assert_eq!(adds.tmax(SpellState::Wet), 5.79);
        assert_eq!(adds.tmax(SpellState::Dry), 6.0);
        assert_eq!(adds.tmin(SpellState::Wet), 2.14);
        assert_eq!(adds.tmin(SpellState::Dry), 2.13);
    }

    #[test]
    fn none_is_all_zero() {
        let adds = AdditiveAdjustments::none();
        assert_eq!(adds.tmax(SpellState::Wet), 0.0);
        assert_eq!(adds.tmin(SpellState::Dry), 0.0);
    }
}
