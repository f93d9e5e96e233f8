//! One simulated day.

use notus_calendar::Date;
use notus_spell::SpellState;

/// One day of generated weather.
///
/// Records are produced in calendar order, exactly one per date of
/// the simulated period, and never revised afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayRecord {
    /// Calendar date of this record.
    pub date: Date,
    /// Wet or dry classification for the day.
    pub state: SpellState,
    /// Precipitation depth in millimetres; exactly `0.0` on dry days.
    pub precip_mm: f64,
    /// Daily maximum temperature in degrees Celsius.
    pub tmax_c: f64,
    /// Daily minimum temperature in degrees Celsius.
    pub tmin_c: f64,
    /// Daily mean temperature, always the Tmax/Tmin midpoint.
    pub tave_c: f64,
}
