//! Pipeline configuration
//!
//! All knobs the training run needs: where the data lives, where artifacts
//! go, how the split is drawn, and the artifact format. Defaults reproduce
//! the canonical run; a YAML file or CLI flags override them.

use crate::artifact::ArtifactFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for a training run
///
/// # Example
///
/// ```yaml
/// data_path: data/stud.csv
/// output_dir: artifacts
/// test_fraction: 0.2
/// seed: 42
/// format: json
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Path to the source CSV table
    pub data_path: PathBuf,

    /// Directory the two artifacts are written into (created on demand)
    pub output_dir: PathBuf,

    /// Fraction of rows held out for evaluation, in (0, 1)
    pub test_fraction: f64,

    /// Random seed for the train/test split
    pub seed: u64,

    /// Artifact serialization format
    pub format: ArtifactFormat,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/stud.csv"),
            output_dir: PathBuf::from("artifacts"),
            test_fraction: 0.2,
            seed: 42,
            format: ArtifactFormat::Json,
        }
    }
}

impl PipelineConfig {
    /// Create a config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data source path
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set the artifact output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the held-out fraction
    pub fn with_test_fraction(mut self, fraction: f64) -> Self {
        self.test_fraction = fraction;
        self
    }

    /// Set the split seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the artifact format
    pub fn with_format(mut self, format: ArtifactFormat) -> Self {
        self.format = format;
        self
    }

    /// Check the configuration for obvious mistakes
    pub fn validate(&self) -> Result<()> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(Error::Config(format!(
                "test_fraction must be in (0, 1), got {}",
                self.test_fraction
            )));
        }
        if self.data_path.as_os_str().is_empty() {
            return Err(Error::Config("data_path must not be empty".to_string()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::Config("output_dir must not be empty".to_string()));
        }
        Ok(())
    }

    /// Path the fitted preprocessor artifact is written to
    pub fn preprocessor_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("preprocessor.{}", self.format.extension()))
    }

    /// Path the fitted model artifact is written to
    pub fn model_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("model.{}", self.format.extension()))
    }
}

/// Load and validate a pipeline config from a YAML file
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<PipelineConfig> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::Config(format!(
            "failed to read config file {}: {e}",
            config_path.as_ref().display()
        ))
    })?;

    let config: PipelineConfig = serde_yaml::from_str(&yaml_content)
        .map_err(|e| Error::Config(format!("failed to parse YAML config: {e}")))?;

    config.validate()?;

    Ok(config)
}
