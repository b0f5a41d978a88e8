//! Error types for calificar
//!
//! A single error enum covers the whole pipeline; each variant marks the
//! stage where the failure occurred. Failures propagate to the top-level
//! caller unmodified, with no retries and no partial recovery.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Dataset load failed: {0}")]
    Load(String),

    #[error("Required column missing from dataset: {column}")]
    MissingColumn { column: String },

    #[error("Preprocessing error: {0}")]
    Preprocess(String),

    #[error("Train/test split failed: {0}")]
    Split(String),

    #[error("Model fit failed: {0}")]
    Fit(String),

    #[error("Prediction failed: {0}")]
    Predict(String),

    #[error("Score computation failed: {0}")]
    Score(String),

    #[error("Artifact persistence failed: {0}")]
    Persist(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;
