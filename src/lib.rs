//! # Calificar: Student Score Training Pipeline
//!
//! Calificar trains a linear regressor that predicts a student's math score
//! from demographic attributes and the two remaining subject scores, then
//! persists the fitted feature preprocessor and the fitted model as two
//! independent artifacts.
//!
//! ## Architecture
//!
//! - **data**: dataset schema, typed records, CSV loading with derived columns
//! - **preprocess**: column-grouped transformer (numeric + categorical branches)
//! - **model**: linear regression over the transformed feature space
//! - **split**: seeded deterministic train/test partitioning
//! - **metrics**: regression metrics (R², MAE, RMSE)
//! - **artifact**: fitted-object persistence (JSON, YAML formats)
//! - **config**: pipeline configuration and CLI
//! - **pipeline**: end-to-end training orchestrator

pub mod artifact;
pub mod config;
pub mod data;
pub mod metrics;
pub mod model;
pub mod pipeline;
pub mod preprocess;
pub mod split;

pub mod error;

// Re-export commonly used types
pub use data::{load_dataset, StudentRecord};
pub use error::{Error, Result};
pub use model::LinearRegression;
pub use pipeline::{TrainPipeline, TrainReport};
pub use preprocess::{FittedPreprocessor, PreprocessorSpec};
pub use split::train_test_split;
