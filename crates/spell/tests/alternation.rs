use notus_calendar::{Date, date_sequence};
use notus_dist::NegBinom;
use notus_spell::{MonthlySpells, SpellMachine, SpellState, simulate_states};
use notus_stream::{SamplerStream, StreamPurpose};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Builds a machine whose dry and wet run lengths follow the given
/// parameters in every month.
fn machine_with(
    dry: (f64, f64, f64),
    wet: (f64, f64, f64),
    wet_seed: u64,
    dry_seed: u64,
) -> SpellMachine {
    let dry = NegBinom::new(dry.0, dry.1, dry.2).expect("valid dry params");
    let wet = NegBinom::new(wet.0, wet.1, wet.2).expect("valid wet params");
    SpellMachine::new(
        MonthlySpells::new([dry; 12], [wet; 12]),
        SpellState::Dry,
        SamplerStream::seeded(StreamPurpose::WetSelector, wet_seed),
        SamplerStream::seeded(StreamPurpose::DrySelector, dry_seed),
    )
}

/// Decomposes a state series into maximal (state, length) runs.
fn runs(states: &[SpellState]) -> Vec<(SpellState, usize)> {
    let mut out: Vec<(SpellState, usize)> = Vec::new();
    for &s in states {
        match out.last_mut() {
            Some((state, len)) if *state == s => *len += 1,
            _ => out.push((s, 1)),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// 1. complete_runs_match_their_draws
// ---------------------------------------------------------------------------
#[test]
fn complete_runs_match_their_draws() {
    let dates = date_sequence(Date::new(2024, 1, 1).unwrap(), 1096);
    let mut machine = machine_with((3.5, 0.34, 2.0), (2.0, 0.45, 1.0), 42, 43);
    let states = simulate_states(&mut machine, &dates);

    // Replay the draws: each completed run's observed length must equal
    // the duration that was drawn for it. The final run may be cut by
    // the end of the series, so it is only bounded by its draw.
    let mut wet = SamplerStream::seeded(StreamPurpose::WetSelector, 42);
    let mut dry = SamplerStream::seeded(StreamPurpose::DrySelector, 43);
    let spells = machine.spells();

    let observed = runs(&states);
    let mut day = 0usize;
    for (i, &(state, len)) in observed.iter().enumerate() {
        let stream = match state {
            SpellState::Dry => &mut dry,
            SpellState::Wet => &mut wet,
        };
        let drawn = spells.draw_duration(state, dates[day].month(), stream) as usize;
        if i + 1 < observed.len() {
            assert_eq!(len, drawn, "run {i} should cover its full draw");
        } else {
            assert!(len <= drawn, "the final run may only be truncated");
        }
        day += len;
    }
    assert_eq!(day, dates.len());
}

// ---------------------------------------------------------------------------
// 2. wet_fraction_tracks_mean_durations
// ---------------------------------------------------------------------------
#[test]
fn wet_fraction_tracks_mean_durations() {
    let dry_params = (3.5, 0.34, 2.0);
    let wet_params = (2.0, 0.45, 1.0);
    let dates = date_sequence(Date::new(2024, 1, 1).unwrap(), 10_000);

    let mut machine = machine_with(dry_params, wet_params, 7, 8);
    let states = simulate_states(&mut machine, &dates);

    let wet_days = states.iter().filter(|s| s.is_wet()).count() as f64;
    let observed = wet_days / states.len() as f64;

    let spells = machine.spells();
    let mean_wet = spells
        .mean_duration(SpellState::Wet, 1)
        .expect("negative binomial mean is defined");
    let mean_dry = spells
        .mean_duration(SpellState::Dry, 1)
        .expect("negative binomial mean is defined");
    let implied = mean_wet / (mean_wet + mean_dry);

    // Alternating renewal: the long-run wet fraction converges to the
    // ratio of mean run lengths. The band is wide enough for 10k days
    // of sampling noise.
    assert!(
        (observed - implied).abs() < 0.05,
        "wet fraction {observed:.4} should be within 0.05 of implied {implied:.4}"
    );
}

// ---------------------------------------------------------------------------
// 3. state_series_is_deterministic
// ---------------------------------------------------------------------------
#[test]
fn state_series_is_deterministic() {
    let dates = date_sequence(Date::new(2030, 6, 15).unwrap(), 730);

    let mut first = machine_with((3.0, 0.3, 1.0), (1.8, 0.5, 1.0), 11, 12);
    let mut second = machine_with((3.0, 0.3, 1.0), (1.8, 0.5, 1.0), 11, 12);

    assert_eq!(
        simulate_states(&mut first, &dates),
        simulate_states(&mut second, &dates)
    );
}
