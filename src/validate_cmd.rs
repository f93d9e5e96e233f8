//! Validate command: load a basin file and report its calibration.

use anyhow::{Context, Result};
use tracing::info_span;

use notus_calendar::span_days;
use notus_calib::CalibrationBundle;
use notus_depth::WET_DAY_THRESHOLD_MM;
use notus_engine::{EngineConfig, WeatherEngine};
use notus_spell::SpellState;
use notus_temperature::{ArCoefficients, StateClimatology};

use crate::cli::ValidateArgs;

/// Load a bundle, assemble an engine, and print a calibration report.
pub fn run(args: ValidateArgs) -> Result<()> {
    let _cmd = info_span!("validate").entered();

    // 1. Load the bundle. Loading already constructs every
    //    distribution and table, so shape errors surface here.
    let bundle = CalibrationBundle::from_path(&args.basin)
        .with_context(|| format!("failed to load basin: {}", args.basin.display()))?;

    // 2. Prove the bundle assembles into an engine.
    let _ = WeatherEngine::new(&bundle, EngineConfig::new().with_master_seed(0));

    // 3. Report.
    println!(
        "basin: {} (latitude {} deg)",
        bundle.label(),
        bundle.latitude_deg()
    );
    println!(
        "period: {} .. {} ({} days)",
        bundle.start(),
        bundle.end(),
        span_days(bundle.start(), bundle.end())
    );
    println!();
    print_spell_report(&bundle);
    println!();
    print_depth_report(&bundle);
    println!();
    print_temperature_report(&bundle);
    println!();
    println!("calibration OK");
    Ok(())
}

fn print_spell_report(bundle: &CalibrationBundle) {
    println!("spell mean lengths (days):");
    println!("  month     dry     wet");
    let mut dry_sum = 0.0;
    let mut wet_sum = 0.0;
    for month in 1..=12u8 {
        let dry = bundle
            .spells()
            .mean_duration(SpellState::Dry, month)
            .unwrap_or(f64::NAN);
        let wet = bundle
            .spells()
            .mean_duration(SpellState::Wet, month)
            .unwrap_or(f64::NAN);
        println!("  {month:>5}  {dry:>6.2}  {wet:>6.2}");
        dry_sum += dry;
        wet_sum += wet;
    }
    let dry_mean = dry_sum / 12.0;
    let wet_mean = wet_sum / 12.0;
    println!("  {:>5}  {dry_mean:>6.2}  {wet_mean:>6.2}", "mean");
    println!(
        "implied wet-day fraction: {:.3}",
        wet_mean / (wet_mean + dry_mean)
    );
}

fn print_depth_report(bundle: &CalibrationBundle) {
    println!("wet-day depth caps (mm, floor {WET_DAY_THRESHOLD_MM}):");
    print!(" ");
    for month in 1..=12u8 {
        print!(" {:>6.1}", bundle.depths().max_for_month(month));
    }
    println!();
}

fn print_temperature_report(bundle: &CalibrationBundle) {
    let radius = bundle.coefficients().persistence_spectral_radius();
    println!("persistence spectral radius: {radius:.4}");
    if radius >= 1.0 {
        println!("  WARNING: non-stationary persistence; anomalies will drift unbounded");
    }

    let (m0, m1) = bundle.stored_moments();
    match ArCoefficients::from_moments(m0, m1) {
        Ok(resolved) => {
            let delta = coefficient_delta(&bundle.coefficients(), &resolved);
            println!("stored-moment consistency: max coefficient delta {delta:.2e}");
            if delta > 1e-6 {
                println!("  WARNING: stored moments disagree with the stored coefficients");
            }
        }
        Err(e) => println!("stored-moment consistency: moments not solvable ({e})"),
    }

    for (name, state) in [("wet", SpellState::Wet), ("dry", SpellState::Dry)] {
        let gap = tave_midpoint_gap(bundle.climatology().for_state(state));
        println!("{name} tave vs (tmax+tmin)/2: max gap {gap:.3} C");
    }
}

/// Largest absolute entry difference between two coefficient pairs.
fn coefficient_delta(stored: &ArCoefficients, resolved: &ArCoefficients) -> f64 {
    let mut max = 0.0f64;
    for (s, r) in [
        (stored.a(), resolved.a()),
        (stored.b(), resolved.b()),
    ] {
        for i in 0..2 {
            for j in 0..2 {
                max = max.max((s[i][j] - r[i][j]).abs());
            }
        }
    }
    max
}

/// Largest gap between the stored daily mean tave and the tmax/tmin
/// midpoint. Generated series always use the midpoint, so a large gap
/// flags an inconsistent climatology.
fn tave_midpoint_gap(state: &StateClimatology) -> f64 {
    let tmax = state.mean_tmax().values();
    let tmin = state.mean_tmin().values();
    let tave = state.mean_tave().values();
    tmax.iter()
        .zip(tmin)
        .zip(tave)
        .map(|((&hi, &lo), &mid)| ((hi + lo) / 2.0 - mid).abs())
        .fold(0.0, f64::max)
}
