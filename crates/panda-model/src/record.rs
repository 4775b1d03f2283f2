//! Raw and canonical record types.
//!
//! A [`RawRecord`] is one source row keyed by source column name. A
//! [`CanonicalRecord`] is the normalized, schema-ordered row that gets
//! sorted, written to a load file, and exported. A [`Schema`] ties the two
//! together: it owns the ordered output column names and knows which column
//! carries the external identifier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One source row: column name to raw, untrimmed value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based source line number, used in error context.
    row: usize,
    values: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new(row: usize) -> Self {
        Self {
            row,
            values: BTreeMap::new(),
        }
    }

    pub fn from_pairs<I, K, V>(row: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { row, values }
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Value of `column`, or `None` when the column is absent from the row.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Value of a hard-required column.
    ///
    /// An empty value is returned as-is; only an absent column is an error.
    pub fn require(&self, column: &str) -> Result<&str> {
        self.get(column).ok_or_else(|| ModelError::MissingColumn {
            column: column.to_string(),
            row: self.row,
        })
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A normalized row in schema order.
///
/// Ordering is the full-tuple lexicographic order of the fields, so the
/// first field (last name) is the primary sort key and every later field
/// breaks ties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalRecord(Vec<String>);

impl CanonicalRecord {
    /// Wrap fields without a width check. Prefer [`Schema::record`].
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Primary sort key (the first field).
    pub fn sort_key(&self) -> &str {
        self.field(0).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_fields(self) -> Vec<String> {
        self.0
    }
}

/// Ordered output columns of one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    name: String,
    columns: Vec<String>,
    id_index: usize,
}

impl Schema {
    /// Build a schema. `id_column` must be one of `columns`.
    pub fn new<I, S>(name: impl Into<String>, columns: I, id_column: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let id_index = columns
            .iter()
            .position(|column| column == id_column)
            .ok_or_else(|| ModelError::UnknownIdColumn {
                schema: name.clone(),
                column: id_column.to_string(),
            })?;
        Ok(Self {
            name,
            columns,
            id_index,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|name| name == column)
    }

    pub fn id_column(&self) -> &str {
        &self.columns[self.id_index]
    }

    /// Build a record, rejecting a field count that differs from the schema.
    pub fn record(&self, fields: Vec<String>) -> Result<CanonicalRecord> {
        let record = CanonicalRecord(fields);
        self.check(&record)?;
        Ok(record)
    }

    pub fn check(&self, record: &CanonicalRecord) -> Result<()> {
        if record.len() == self.width() {
            Ok(())
        } else {
            Err(ModelError::FieldCount {
                schema: self.name.clone(),
                expected: self.width(),
                actual: record.len(),
            })
        }
    }

    /// External identifier of a record: the value of the id column.
    pub fn external_id<'a>(&self, record: &'a CanonicalRecord) -> &'a str {
        record.field(self.id_index).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new("people", ["lname", "fname", "id"], "id").expect("schema")
    }

    #[test]
    fn require_distinguishes_empty_from_absent() {
        let raw = RawRecord::from_pairs(7, [("lname", ""), ("fname", "Ana")]);
        assert_eq!(raw.require("lname"), Ok(""));
        assert_eq!(
            raw.require("mname"),
            Err(ModelError::MissingColumn {
                column: "mname".to_string(),
                row: 7,
            })
        );
    }

    #[test]
    fn schema_rejects_unknown_id_column() {
        let err = Schema::new("people", ["lname"], "id").unwrap_err();
        assert!(matches!(err, ModelError::UnknownIdColumn { .. }));
    }

    #[test]
    fn record_checks_width() {
        let schema = schema();
        assert!(schema.record(vec!["a".into(), "b".into(), "1".into()]).is_ok());
        let err = schema.record(vec!["a".into()]).unwrap_err();
        assert_eq!(
            err,
            ModelError::FieldCount {
                schema: "people".to_string(),
                expected: 3,
                actual: 1,
            }
        );
    }

    #[test]
    fn external_id_reads_id_column() {
        let schema = schema();
        let record = schema
            .record(vec!["Smith".into(), "Jo".into(), "42".into()])
            .expect("record");
        assert_eq!(schema.external_id(&record), "42");
        assert_eq!(schema.id_column(), "id");
    }

    #[test]
    fn canonical_order_is_full_tuple() {
        let a = CanonicalRecord::new(vec!["Smith".into(), "Al".into()]);
        let b = CanonicalRecord::new(vec!["Smith".into(), "Bo".into()]);
        let c = CanonicalRecord::new(vec!["Adams".into(), "Zed".into()]);
        assert!(c < a);
        assert!(a < b);
    }
}
