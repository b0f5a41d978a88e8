//! Pipeline configuration and CLI
//!
//! The original run hardcoded the data path, split fraction, and seed; here
//! they are explicit configuration with the same values as defaults,
//! overridable from a YAML file or the command line.

mod cli;
mod schema;

pub use cli::{apply_overrides, parse_args, Cli, Command, TrainArgs, ValidateArgs};
pub use schema::{load_config, PipelineConfig};
