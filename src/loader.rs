// src/loader.rs
//! Reads the property dataset from CSV.

use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::{LandsphereError, Result};
use crate::types::PropertyRecord;

/// Loads every record from the CSV file at `path`.
///
/// # Errors
/// Returns `Io` if the file cannot be opened and `Csv` for the first row
/// that does not match the expected columns and types.
pub fn load_records(path: &Path) -> Result<Vec<PropertyRecord>> {
    let file = File::open(path).map_err(|source| LandsphereError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let records = parse_records(file).map_err(|e| match e {
        LandsphereError::Csv { source, .. } => LandsphereError::Csv {
            source,
            path: path.to_path_buf(),
        },
        other => other,
    })?;
    debug!(path = %path.display(), rows = records.len(), "loaded dataset");
    Ok(records)
}

/// Parses records from any reader. The first line must be the header row.
///
/// # Errors
/// Returns `Csv` for the first malformed row.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<PropertyRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.deserialize::<PropertyRecord>() {
        records.push(row?);
    }
    Ok(records)
}
