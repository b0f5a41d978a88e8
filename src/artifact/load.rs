//! Artifact loading
//!
//! The read side of artifact persistence, used by inference-time consumers
//! of the fitted preprocessor and model.

use super::format::ArtifactFormat;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Load a fitted object from a file
///
/// The format is detected from the file extension.
///
/// # Example
///
/// ```no_run
/// use calificar::artifact::load_artifact;
/// use calificar::model::LinearRegression;
///
/// let model: LinearRegression = load_artifact("artifacts/model.json").unwrap();
/// ```
pub fn load_artifact<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::Serialization("artifact file has no extension".to_string()))?;

    let format = ArtifactFormat::from_extension(ext)
        .ok_or_else(|| Error::Serialization(format!("unsupported artifact extension: {ext}")))?;

    let content = fs::read_to_string(path)?;

    match format {
        ArtifactFormat::Json => serde_json::from_str(&content)
            .map_err(|e| Error::Serialization(format!("JSON deserialization failed: {e}"))),
        ArtifactFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| Error::Serialization(format!("YAML deserialization failed: {e}"))),
    }
}
