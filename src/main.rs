//! Calificar CLI
//!
//! # Usage
//!
//! ```bash
//! # Train with defaults (data/stud.csv -> artifacts/)
//! calificar train
//!
//! # Train from config with overrides
//! calificar train config.yaml --seed 7 --output-dir ./artifacts
//!
//! # Validate config and dataset schema without training
//! calificar validate config.yaml --check-data
//! ```

use calificar::config::{
    apply_overrides, load_config, Cli, Command, PipelineConfig, TrainArgs, ValidateArgs,
};
use calificar::data::load_dataset;
use calificar::pipeline::TrainPipeline;
use calificar::Result;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Train(args) => run_train(args, cli.quiet),
        Command::Validate(args) => run_validate(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(config_path: Option<&std::path::Path>) -> Result<PipelineConfig> {
    match config_path {
        Some(path) => load_config(path),
        None => Ok(PipelineConfig::default()),
    }
}

fn run_train(args: TrainArgs, quiet: bool) -> Result<()> {
    let mut config = resolve_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args);
    config.validate()?;

    if args.dry_run {
        let records = load_dataset(&config.data_path)?;
        println!("✓ Config valid; {} rows ready for training", records.len());
        return Ok(());
    }

    let mut pipeline = if quiet {
        TrainPipeline::silent(config)
    } else {
        TrainPipeline::new(config)
    };
    let report = pipeline.run()?;

    if quiet {
        // Keep the success confirmation even in quiet mode
        println!(
            "✓ Preprocessor and model saved: {} / {}",
            report.preprocessor_path.display(),
            report.model_path.display()
        );
    }

    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    config.validate()?;
    println!("✓ Config valid");

    if args.check_data {
        let records = load_dataset(&config.data_path)?;
        println!("✓ Dataset schema valid ({} rows)", records.len());
    }

    Ok(())
}
