//! Generate command: simulate one basin and write the output files.

use std::fs;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use notus_calib::CalibrationBundle;
use notus_engine::{DayRecord, EngineConfig, WeatherEngine, WeatherSeries};
use notus_stream::StreamSeeds;

use crate::cli::GenerateArgs;
use crate::config::NotusConfig;

const CSV_HEADER: &str = "date,state,precip_mm,tmax_c,tmin_c,tave_c";

/// Run the generator and write the daily CSV plus the run summary.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // 1. Load the run configuration, CLI overrides winning.
    let config = NotusConfig::load(&args.config)?;
    let basin_path = args
        .basin
        .or_else(|| config.paths.basin.clone())
        .context("no basin path: set [paths].basin in config or use --basin")?;
    let output_dir = args.output_dir.unwrap_or_else(|| config.paths.output_dir.clone());
    let seed = args.seed.or(config.run.seed);

    // 2. Load and validate the calibration bundle.
    let bundle = CalibrationBundle::from_path(&basin_path)
        .with_context(|| format!("failed to load basin: {}", basin_path.display()))?;
    info!(
        basin = bundle.label(),
        start = %bundle.start(),
        end = %bundle.end(),
        "calibration bundle loaded"
    );

    // 3. Assemble the engine and walk the period.
    let mut engine_config =
        EngineConfig::new().with_initial_state(config.run.initial_spell_state()?);
    if let Some(master) = seed {
        engine_config = engine_config.with_master_seed(master);
    }
    let series = WeatherEngine::new(&bundle, engine_config).run();

    // 4. Write the daily series.
    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory: {}", output_dir.display())
    })?;
    let csv_path = output_dir.join(format!("{}_daily.csv", bundle.label()));
    fs::write(
        &csv_path,
        render_csv(series.records(), config.output.float_precision),
    )
    .with_context(|| format!("failed to write daily CSV: {}", csv_path.display()))?;
    info!(path = %csv_path.display(), rows = series.len(), "daily series written");

    // 5. Write the run summary sidecar.
    if config.output.write_summary {
        let summary = RunSummary::from_run(&bundle, &series)?;
        let json_path = output_dir.join(format!("{}_summary.json", bundle.label()));
        let text =
            serde_json::to_string_pretty(&summary).context("failed to encode run summary")?;
        fs::write(&json_path, text)
            .with_context(|| format!("failed to write run summary: {}", json_path.display()))?;
        info!(path = %json_path.display(), "run summary written");
    }

    Ok(())
}

fn render_csv(records: &[DayRecord], precision: usize) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 48);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&csv_line(record, precision));
        out.push('\n');
    }
    out
}

fn csv_line(record: &DayRecord, precision: usize) -> String {
    format!(
        "{},{},{:.p$},{:.p$},{:.p$},{:.p$}",
        record.date,
        record.state.label(),
        record.precip_mm,
        record.tmax_c,
        record.tmin_c,
        record.tave_c,
        p = precision
    )
}

/// Run summary written next to the daily CSV.
#[derive(Debug, Serialize)]
struct RunSummary {
    basin: String,
    latitude_deg: f64,
    period: PeriodSummary,
    seeds: SeedsSummary,
    days: usize,
    wet_days: usize,
    wet_fraction: f64,
    total_precip_mm: f64,
    max_daily_precip_mm: f64,
    mean_tmax_c: f64,
    mean_tmin_c: f64,
    persistence_spectral_radius: f64,
}

#[derive(Debug, Serialize)]
struct PeriodSummary {
    start: String,
    end: String,
}

#[derive(Debug, Serialize)]
struct SeedsSummary {
    wet_selector: u64,
    dry_selector: u64,
    depth: u64,
    residual: u64,
}

impl From<StreamSeeds> for SeedsSummary {
    fn from(seeds: StreamSeeds) -> Self {
        Self {
            wet_selector: seeds.wet_selector(),
            dry_selector: seeds.dry_selector(),
            depth: seeds.depth(),
            residual: seeds.residual(),
        }
    }
}

impl RunSummary {
    fn from_run(bundle: &CalibrationBundle, series: &WeatherSeries) -> Result<Self> {
        Ok(Self {
            basin: bundle.label().to_string(),
            latitude_deg: bundle.latitude_deg(),
            period: PeriodSummary {
                start: bundle.start().to_string(),
                end: bundle.end().to_string(),
            },
            seeds: SeedsSummary::from(series.seeds()),
            days: series.len(),
            wet_days: series.wet_days(),
            wet_fraction: series.wet_fraction(),
            total_precip_mm: series.total_precip_mm(),
            max_daily_precip_mm: series.max_precip_mm(),
            mean_tmax_c: series.mean_tmax_c().context("series has no days")?,
            mean_tmin_c: series.mean_tmin_c().context("series has no days")?,
            persistence_spectral_radius: bundle.coefficients().persistence_spectral_radius(),
        })
    }
}

#[cfg(test)]
mod tests {
    use notus_calendar::Date;
    use notus_spell::SpellState;

    use super::*;
    use crate::testdata::basin_text;

    #[test]
    fn csv_line_respects_precision() {
        let record = DayRecord {
            date: Date::new(2024, 1, 2).unwrap(),
            state: SpellState::Wet,
            precip_mm: 3.14159,
            tmax_c: 20.2,
            tmin_c: 10.0,
            tave_c: 15.1,
        };
        assert_eq!(csv_line(&record, 2), "2024-01-02,wet,3.14,20.20,10.00,15.10");
        assert_eq!(csv_line(&record, 3), "2024-01-02,wet,3.142,20.200,10.000,15.100");
    }

    #[test]
    fn rendered_csv_has_header_and_one_row_per_record() {
        let records = vec![
            DayRecord {
                date: Date::new(2024, 2, 28).unwrap(),
                state: SpellState::Dry,
                precip_mm: 0.0,
                tmax_c: 22.5,
                tmin_c: 9.5,
                tave_c: 16.0,
            },
            DayRecord {
                date: Date::new(2024, 2, 29).unwrap(),
                state: SpellState::Wet,
                precip_mm: 7.25,
                tmax_c: 18.5,
                tmin_c: 8.5,
                tave_c: 13.5,
            },
        ];
        let csv = render_csv(&records, 2);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "2024-02-28,dry,0.00,22.50,9.50,16.00");
        assert_eq!(lines[2], "2024-02-29,wet,7.25,18.50,8.50,13.50");
    }

    #[test]
    fn generate_writes_daily_csv_and_summary() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let basin_path = dir.path().join("rio_seco.toml");
        std::fs::write(&basin_path, basin_text()).expect("write basin file");
        let config_path = dir.path().join("notus.toml");
        std::fs::write(&config_path, "[run]\nseed = 42\n").expect("write config file");
        let out_dir = dir.path().join("out");

        let args = GenerateArgs {
            config: config_path,
            basin: Some(basin_path),
            seed: None,
            output_dir: Some(out_dir.clone()),
        };
        run(args).expect("generate succeeds");

        // 2024-01-01..2024-03-31 covers 91 days.
        let csv = std::fs::read_to_string(out_dir.join("rio_seco_daily.csv"))
            .expect("daily CSV written");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.len(), 1 + 91);
        assert!(lines[1].starts_with("2024-01-01,"));
        assert!(lines[91].starts_with("2024-03-31,"));

        let summary: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(out_dir.join("rio_seco_summary.json"))
                .expect("summary written"),
        )
        .expect("summary parses");
        assert_eq!(summary["basin"], "rio_seco");
        assert_eq!(summary["days"], 91);
        assert_eq!(summary["period"]["start"], "2024-01-01");
        assert_eq!(summary["period"]["end"], "2024-03-31");
        let expected_depth_seed = StreamSeeds::derive(42).depth();
        assert_eq!(summary["seeds"]["depth"], serde_json::json!(expected_depth_seed));
        assert!(summary["wet_fraction"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn summary_can_be_disabled() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let basin_path = dir.path().join("rio_seco.toml");
        std::fs::write(&basin_path, basin_text()).expect("write basin file");
        let config_path = dir.path().join("notus.toml");
        std::fs::write(&config_path, "[output]\nwrite_summary = false\n")
            .expect("write config file");
        let out_dir = dir.path().join("out");

        let args = GenerateArgs {
            config: config_path,
            basin: Some(basin_path),
            seed: Some(7),
            output_dir: Some(out_dir.clone()),
        };
        run(args).expect("generate succeeds");

        assert!(out_dir.join("rio_seco_daily.csv").exists());
        assert!(!out_dir.join("rio_seco_summary.json").exists());
    }
}
