//! Artifact saving

use super::format::{ArtifactFormat, SaveConfig};
use crate::error::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Durably write a fitted object to a named location
///
/// Containing directories are created on demand. The file is fully rewritten
/// on every call; there is no versioning and no atomicity guarantee across
/// multiple artifacts.
///
/// # Example
///
/// ```no_run
/// use calificar::artifact::{save_artifact, SaveConfig};
///
/// let weights = vec![1.0, 2.0, 3.0];
/// save_artifact(&weights, "artifacts/weights.json", &SaveConfig::default()).unwrap();
/// ```
pub fn save_artifact<T: Serialize>(
    value: &T,
    path: impl AsRef<Path>,
    config: &SaveConfig,
) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Persist(format!(
                    "failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let data = match config.format {
        ArtifactFormat::Json => {
            if config.pretty {
                serde_json::to_string_pretty(value)
                    .map_err(|e| Error::Persist(format!("JSON serialization failed: {e}")))?
            } else {
                serde_json::to_string(value)
                    .map_err(|e| Error::Persist(format!("JSON serialization failed: {e}")))?
            }
        }
        ArtifactFormat::Yaml => serde_yaml::to_string(value)
            .map_err(|e| Error::Persist(format!("YAML serialization failed: {e}")))?,
    };

    fs::write(path, data)
        .map_err(|e| Error::Persist(format!("failed to write {}: {e}", path.display())))?;

    Ok(())
}
