//! Whole-series state simulation over a date range.

use notus_calendar::Date;

use crate::error::SpellError;
use crate::machine::SpellMachine;
use crate::state::SpellState;

/// Simulates one state per date by stepping `machine` across `dates`.
///
/// # Arguments
///
/// * `machine` - The spell machine to advance; it keeps any partial run
///   it is holding, so passing a fresh machine yields a series that
///   starts a new first run.
/// * `dates` - Calendar days in order.
///
/// # Returns
///
/// A vector of [`SpellState`] values with the same length as `dates`.
pub fn simulate_states(machine: &mut SpellMachine, dates: &[Date]) -> Vec<SpellState> {
    let mut out = vec![SpellState::Dry; dates.len()];
    // Delegate to _into; unwrap is safe because we sized the buffer correctly.
    simulate_states_into(machine, dates, &mut out).expect("buffer length matches dates length");
    out
}

/// Simulates states into a pre-allocated buffer.
///
/// # Errors
///
/// Returns [`SpellError::BufferLengthMismatch`] if `out.len() != dates.len()`.
pub fn simulate_states_into(
    machine: &mut SpellMachine,
    dates: &[Date],
    out: &mut [SpellState],
) -> Result<(), SpellError> {
    if out.len() != dates.len() {
        return Err(SpellError::BufferLengthMismatch {
            expected: dates.len(),
            got: out.len(),
        });
    }
    for (slot, &date) in out.iter_mut().zip(dates.iter()) {
        *slot = machine.step(date);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use notus_calendar::date_sequence;
    use notus_dist::NegBinom;
    use notus_stream::{SamplerStream, StreamPurpose};

    use super::*;
    use crate::durations::MonthlySpells;

    fn test_machine(wet_seed: u64, dry_seed: u64) -> SpellMachine {
        let d = NegBinom::new(2.0, 0.4, 1.0).unwrap();
        SpellMachine::new(
            MonthlySpells::new([d; 12], [d; 12]),
            SpellState::Dry,
            SamplerStream::seeded(StreamPurpose::WetSelector, wet_seed),
            SamplerStream::seeded(StreamPurpose::DrySelector, dry_seed),
        )
    }

    // 1. length_correctness
    #[test]
    fn length_correctness() {
        let dates = date_sequence(Date::new(2024, 1, 1).unwrap(), 100);
        let mut machine = test_machine(1, 2);
        let states = simulate_states(&mut machine, &dates);
        assert_eq!(states.len(), 100);
    }

    // 2. empty_dates
    #[test]
    fn empty_dates() {
        let mut machine = test_machine(1, 2);
        let states = simulate_states(&mut machine, &[]);
        assert!(states.is_empty());
    }

    // 3. into_matches_allocating
    #[test]
    fn into_matches_allocating() {
        let dates = date_sequence(Date::new(2024, 1, 1).unwrap(), 200);

        let mut machine = test_machine(9, 10);
        let alloc_result = simulate_states(&mut machine, &dates);

        let mut machine = test_machine(9, 10);
        let mut buf = vec![SpellState::Dry; dates.len()];
        simulate_states_into(&mut machine, &dates, &mut buf).unwrap();

        assert_eq!(alloc_result, buf);
    }

    // 4. buffer_mismatch_error
    #[test]
    fn buffer_mismatch_error() {
        let dates = date_sequence(Date::new(2024, 1, 1).unwrap(), 10);
        let mut machine = test_machine(1, 2);
        let mut buf = vec![SpellState::Dry; 5]; // wrong size

        let result = simulate_states_into(&mut machine, &dates, &mut buf);
        assert!(matches!(
            result,
            Err(SpellError::BufferLengthMismatch {
                expected: 10,
                got: 5
            })
        ));
    }

    // 5. continues_partial_runs_across_calls
    #[test]
    fn continues_partial_runs_across_calls() {
        let dates = date_sequence(Date::new(2024, 1, 1).unwrap(), 300);

        let mut machine = test_machine(5, 6);
        let whole = simulate_states(&mut machine, &dates);

        // The same series generated in two chunks must agree, because
        // the machine carries its partial run across the split.
        let mut machine = test_machine(5, 6);
        let mut split = simulate_states(&mut machine, &dates[..137]);
        split.extend(simulate_states(&mut machine, &dates[137..]));

        assert_eq!(whole, split);
    }
}
