//! Positional column selection for header-less extracts.
//!
//! The statewide voter extract is a tab-delimited file without a header and
//! without quoting; a column is known only by its 1-based position.
//! [`ColumnSelection`] names the positions a dataset needs and turns each
//! line into a [`RawRecord`].

use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use panda_model::RawRecord;
use tracing::debug;

use crate::decode::decode_field;
use crate::error::{IngestError, Result};

/// A named, 1-based source column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedColumn {
    pub index: usize,
    pub name: String,
    /// Rows too short to contain a required column are rejected; optional
    /// columns are simply left out of the record.
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    columns: Vec<SelectedColumn>,
    delimiter: u8,
}

impl ColumnSelection {
    pub fn new(delimiter: u8) -> Self {
        Self {
            columns: Vec::new(),
            delimiter,
        }
    }

    #[must_use]
    pub fn required(mut self, index: usize, name: impl Into<String>) -> Self {
        self.columns.push(SelectedColumn {
            index,
            name: name.into(),
            required: true,
        });
        self
    }

    #[must_use]
    pub fn optional(mut self, index: usize, name: impl Into<String>) -> Self {
        self.columns.push(SelectedColumn {
            index,
            name: name.into(),
            required: false,
        });
        self
    }

    /// Parse a `csvcut -c` style list (`"3,5,6,4"`) and pair it with names.
    /// Every parsed column is required.
    pub fn parse(spec: &str, names: &[&str], delimiter: u8) -> Result<Self> {
        let invalid = |reason: String| IngestError::InvalidSelection {
            spec: spec.to_string(),
            reason,
        };
        let mut indices = Vec::new();
        for part in spec.split(',') {
            let part = part.trim();
            let index: usize = part
                .parse()
                .map_err(|_| invalid(format!("'{part}' is not a column number")))?;
            if index == 0 {
                return Err(invalid("column numbers start at 1".to_string()));
            }
            indices.push(index);
        }
        if indices.len() != names.len() {
            return Err(invalid(format!(
                "{} columns but {} names",
                indices.len(),
                names.len()
            )));
        }
        let mut selection = Self::new(delimiter);
        for (index, name) in indices.into_iter().zip(names) {
            selection = selection.required(index, *name);
        }
        Ok(selection)
    }

    pub fn columns(&self) -> &[SelectedColumn] {
        &self.columns
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Pick the selected fields out of one source line.
    pub fn select(&self, record: &ByteRecord, line: u64, path: &Path) -> Result<RawRecord> {
        let mut raw = RawRecord::new(usize::try_from(line).unwrap_or(usize::MAX));
        for column in &self.columns {
            match record.get(column.index - 1) {
                Some(bytes) => raw.insert(column.name.clone(), decode_field(bytes)),
                None if column.required => {
                    return Err(IngestError::ShortRow {
                        path: path.to_path_buf(),
                        line,
                        column: column.name.clone(),
                        needed: column.index,
                        found: record.len(),
                    });
                }
                None => {}
            }
        }
        Ok(raw)
    }
}

/// Read a header-less delimited extract through a column selection.
///
/// Blank lines are skipped. The first short row fails the whole file.
pub fn read_positional(path: &Path, selection: &ColumnSelection) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(selection.delimiter())
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)
        .map_err(|e| IngestError::csv(path, e))?;
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
        rows.push(selection.select(&record, line, path)?);
    }
    debug!(path = %path.display(), rows = rows.len(), "read positional extract");
    Ok(rows)
}
