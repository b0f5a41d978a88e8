//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! calificar train
//! calificar train config.yaml --seed 7 --output-dir ./artifacts
//! calificar validate config.yaml
//! ```

use super::schema::PipelineConfig;
use crate::artifact::ArtifactFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Calificar: student score training pipeline
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "calificar")]
#[command(version)]
#[command(about = "Trains a student-score regressor and persists the fitted preprocessor and model")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the full training pipeline
    Train(TrainArgs),

    /// Validate configuration and dataset schema without training
    Validate(ValidateArgs),
}

/// Arguments for the train command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TrainArgs {
    /// Path to YAML configuration file (defaults apply when omitted)
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Override data source path
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Override artifact output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Override held-out fraction
    #[arg(short, long)]
    pub test_fraction: Option<f64>,

    /// Override random seed for the split
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override artifact format (json, yaml)
    #[arg(short, long)]
    pub format: Option<ArtifactFormat>,

    /// Load and validate everything but skip fitting and persistence
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file (defaults apply when omitted)
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Also check that the dataset exists and carries the required columns
    #[arg(long)]
    pub check_data: bool,
}

impl clap::ValueEnum for ArtifactFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[ArtifactFormat::Json, ArtifactFormat::Yaml]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.extension()))
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a pipeline config
pub fn apply_overrides(config: &mut PipelineConfig, args: &TrainArgs) {
    if let Some(data) = &args.data {
        config.data_path = data.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(fraction) = args.test_fraction {
        config.test_fraction = fraction;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(format) = args.format {
        config.format = format;
    }
}
