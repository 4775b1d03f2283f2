//! Load files: the sorted, normalized CSV handed to the exporter.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use panda_model::{CanonicalRecord, Schema};
use tracing::debug;

use crate::decode::normalize_header;
use crate::error::{IngestError, Result};

/// Write a header row of schema column names followed by one row per record.
///
/// Returns the number of records written.
pub fn write_load_file(path: &Path, schema: &Schema, records: &[CanonicalRecord]) -> Result<usize> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|e| IngestError::csv(path, e))?;
    writer
        .write_record(schema.columns())
        .map_err(|e| IngestError::csv(path, e))?;
    for record in records {
        writer
            .write_record(record.fields())
            .map_err(|e| IngestError::csv(path, e))?;
    }
    writer
        .flush()
        .map_err(|e| IngestError::csv(path, csv::Error::from(e)))?;
    debug!(path = %path.display(), rows = records.len(), "wrote load file");
    Ok(records.len())
}

/// Read a load file back, checking its header against the schema.
pub fn read_load_file(path: &Path, schema: &Schema) -> Result<Vec<CanonicalRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| IngestError::csv(path, e))?;
    let found: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::csv(path, e))?
        .iter()
        .map(normalize_header)
        .collect();
    if found.as_slice() != schema.columns() {
        return Err(IngestError::HeaderMismatch {
            path: path.to_path_buf(),
            expected: schema.columns().to_vec(),
            found,
        });
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| IngestError::csv(path, e))?;
        let line = row.position().map_or(0, csv::Position::line);
        let fields = row.iter().map(str::to_string).collect();
        let record = schema
            .record(fields)
            .map_err(|source| IngestError::Record {
                path: path.to_path_buf(),
                line,
                source,
            })?;
        records.push(record);
    }
    Ok(records)
}
