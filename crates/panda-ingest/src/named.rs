use std::path::Path;

use csv::ReaderBuilder;
use panda_model::RawRecord;
use tracing::debug;

use crate::decode::{decode_field, normalize_header};
use crate::error::{IngestError, Result};

/// Read a header-named CSV into raw records keyed by cleaned header names.
///
/// Values are kept untrimmed; rows shorter than the header simply lack the
/// trailing columns, which the normalizer reports if they are required.
pub fn read_named_csv(path: &Path, delimiter: u8) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::csv(path, e))?;
    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(|e| IngestError::csv(path, e))?
        .iter()
        .map(|bytes| normalize_header(&decode_field(bytes)))
        .collect();

    let mut rows = Vec::new();
    for result in reader.byte_records() {
        let record = result.map_err(|e| IngestError::csv(path, e))?;
        if record
            .iter()
            .all(|field| field.iter().all(u8::is_ascii_whitespace))
        {
            continue;
        }
        let line = record.position().map_or(0, csv::Position::line);
        let mut raw = RawRecord::new(usize::try_from(line).unwrap_or(usize::MAX));
        for (header, bytes) in headers.iter().zip(record.iter()) {
            raw.insert(header.clone(), decode_field(bytes));
        }
        rows.push(raw);
    }
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read named csv"
    );
    Ok(rows)
}
