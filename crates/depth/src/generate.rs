//! Depth series generation over a classified date range.

use notus_calendar::Date;
use notus_spell::SpellState;
use notus_stream::SamplerStream;

use crate::error::DepthError;
use crate::tables::DepthTables;

/// Generates one depth per day for an already-classified series.
///
/// Wet days consume exactly one uniform from `stream` and are clipped
/// to the monthly bounds; dry days are exactly `0.0` and leave the
/// stream untouched, so the depth stream's position depends only on
/// how many wet days precede it.
///
/// # Errors
///
/// Returns [`DepthError::LengthMismatch`] if `dates` and `states`
/// differ in length.
pub fn generate_depths(
    tables: &DepthTables,
    dates: &[Date],
    states: &[SpellState],
    stream: &mut SamplerStream,
) -> Result<Vec<f64>, DepthError> {
    let mut out = vec![0.0; dates.len()];
    generate_depths_into(tables, dates, states, stream, &mut out)?;
    Ok(out)
}

/// Generates depths into a pre-allocated buffer.
///
/// # Errors
///
/// Returns [`DepthError::LengthMismatch`] if `dates` and `states`
/// differ in length, or [`DepthError::BufferLengthMismatch`] if the
/// buffer does not match the series length.
pub fn generate_depths_into(
    tables: &DepthTables,
    dates: &[Date],
    states: &[SpellState],
    stream: &mut SamplerStream,
    out: &mut [f64],
) -> Result<(), DepthError> {
    if dates.len() != states.len() {
        return Err(DepthError::LengthMismatch {
            dates_len: dates.len(),
            states_len: states.len(),
        });
    }
    if out.len() != dates.len() {
        return Err(DepthError::BufferLengthMismatch {
            expected: dates.len(),
            got: out.len(),
        });
    }
    for ((slot, &date), &state) in out.iter_mut().zip(dates.iter()).zip(states.iter()) {
        *slot = if state.is_wet() {
            tables.draw(date.month(), stream)
        } else {
            0.0
        };
    }
    Ok(())
}
