use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use notus_spell::SpellState;

/// Top-level run configuration (`notus.toml`).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct NotusConfig {
    /// Run settings.
    #[serde(default)]
    pub run: RunToml,

    /// Input and output locations.
    #[serde(default)]
    pub paths: PathsToml,

    /// Output file settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl NotusConfig {
    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunToml {
    /// Master seed; absent means OS entropy (the seeds used are
    /// reported in the run summary).
    #[serde(default)]
    pub seed: Option<u64>,

    /// State the first spell starts in ("dry" or "wet").
    #[serde(default = "default_initial_state")]
    pub initial_state: String,
}

impl RunToml {
    /// Parses the configured initial spell state.
    pub fn initial_spell_state(&self) -> Result<SpellState> {
        match self.initial_state.as_str() {
            "dry" => Ok(SpellState::Dry),
            "wet" => Ok(SpellState::Wet),
            other => bail!("invalid [run].initial_state {other:?}: expected \"dry\" or \"wet\""),
        }
    }
}

impl Default for RunToml {
    fn default() -> Self {
        Self {
            seed: None,
            initial_state: default_initial_state(),
        }
    }
}

fn default_initial_state() -> String {
    "dry".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsToml {
    /// Calibration bundle of the basin to simulate.
    #[serde(default)]
    pub basin: Option<PathBuf>,

    /// Directory the output files are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for PathsToml {
    fn default() -> Self {
        Self {
            basin: None,
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Whether to write the JSON run summary next to the daily CSV.
    #[serde(default = "default_true")]
    pub write_summary: bool,

    /// Decimal places for floating-point CSV fields.
    #[serde(default = "default_float_precision")]
    pub float_precision: usize,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            write_summary: true,
            float_precision: default_float_precision(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_float_precision() -> usize {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_takes_all_defaults() {
        let config: NotusConfig = toml::from_str("").unwrap();
        assert_eq!(config.run.seed, None);
        assert_eq!(config.run.initial_state, "dry");
        assert_eq!(config.paths.basin, None);
        assert_eq!(config.paths.output_dir, PathBuf::from("out"));
        assert!(config.output.write_summary);
        assert_eq!(config.output.float_precision, 2);
    }

    #[test]
    fn full_config_parses() {
        let text = r#"
[run]
seed = 42
initial_state = "wet"

[paths]
basin = "basins/blanco.toml"
output_dir = "synthetic"

[output]
write_summary = false
float_precision = 4
"#;
        let config: NotusConfig = toml::from_str(text).unwrap();
        assert_eq!(config.run.seed, Some(42));
        assert_eq!(config.run.initial_spell_state().unwrap(), SpellState::Wet);
        assert_eq!(
            config.paths.basin.as_deref(),
            Some(Path::new("basins/blanco.toml"))
        );
        assert_eq!(config.paths.output_dir, PathBuf::from("synthetic"));
        assert!(!config.output.write_summary);
        assert_eq!(config.output.float_precision, 4);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<NotusConfig>("[run]\nseeed = 1\n").is_err());
        assert!(toml::from_str::<NotusConfig>("[extras]\nx = 1\n").is_err());
    }

    #[test]
    fn initial_state_must_be_dry_or_wet() {
        let config: NotusConfig = toml::from_str("[run]\ninitial_state = \"damp\"\n").unwrap();
        let err = config.run.initial_spell_state().unwrap_err();
        assert!(err.to_string().contains("damp"));

        let dry: NotusConfig = toml::from_str("").unwrap();
        assert_eq!(dry.run.initial_spell_state().unwrap(), SpellState::Dry);
    }
}
