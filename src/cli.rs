use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Notus stochastic daily weather generator.
#[derive(Parser)]
#[command(
    name = "notus",
    version,
    about = "Stochastic daily weather generator for watershed basins"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a synthetic daily weather series for one basin.
    Generate(GenerateArgs),
    /// Load a calibration bundle and report its diagnostics.
    Validate(ValidateArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML run configuration file.
    #[arg(short, long, default_value = "notus.toml")]
    pub config: PathBuf,

    /// Override the calibration bundle path from config.
    #[arg(short, long)]
    pub basin: Option<PathBuf>,

    /// Override the master seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the output directory from config.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the `validate` subcommand.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the calibration bundle to check.
    #[arg(short, long)]
    pub basin: PathBuf,
}
