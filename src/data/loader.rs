//! Dataset loading
//!
//! Reads the source CSV into typed records and derives the composite score
//! columns. The header is validated before any row is parsed: a missing
//! required column is a fatal configuration error, not something to recover
//! from.

use super::record::{RawRecord, StudentRecord};
use super::schema::required_columns;
use crate::error::{Error, Result};
use std::path::Path;

/// Load the engineered table from a CSV source
///
/// # Example
///
/// ```no_run
/// use calificar::data::load_dataset;
///
/// let records = load_dataset("data/stud.csv").unwrap();
/// println!("loaded {} rows", records.len());
/// ```
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<StudentRecord>> {
    let path = path.as_ref();

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::Load(format!("failed to open {}: {e}", path.display())))?;

    validate_header(&mut reader)?;

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = row.map_err(|e| Error::Load(format!("row {}: {e}", i + 1)))?;
        records.push(StudentRecord::from_raw(raw));
    }

    Ok(records)
}

/// Check that every required column is present in the header
fn validate_header<R: std::io::Read>(reader: &mut csv::Reader<R>) -> Result<()> {
    let headers = reader
        .headers()
        .map_err(|e| Error::Load(format!("failed to read header: {e}")))?;

    for column in required_columns() {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    Ok(())
}
