//! Florida statewide voter extract.

use panda_ingest::ColumnSelection;
use panda_model::{CanonicalRecord, RawRecord, Schema};
use panda_tables::VoterTables;

use crate::Normalizer;
use crate::error::{NormalizeError, Result};
use crate::text::collapse_whitespace;

/// Canonical voter columns, in load-file order.
pub const VOTER_COLUMNS: &[&str] = &[
    "lname",
    "fname",
    "mname",
    "suffix",
    "addr1",
    "addr2",
    "city",
    "zipcode",
    "gender",
    "race",
    "birthdate",
    "party",
    "areacode",
    "phone",
    "email",
    "exemption_requested",
    "registration_date",
    "active",
    "voter_id",
];

/// Positions of the fields the loader keeps from the 38-column extract.
const EXTRACT_REQUIRED: &[(usize, &str)] = &[
    (3, "lname"),
    (5, "fname"),
    (6, "mname"),
    (4, "suffix"),
    (8, "addr1"),
    (9, "addr2"),
    (10, "city"),
    (12, "zip"),
    (20, "gender"),
    (21, "race"),
    (22, "birthdate"),
    (24, "party"),
    (35, "areacode"),
    (36, "phone"),
    (38, "email"),
    (2, "voter_ID"),
];

/// Added to the extract in 2023.
const EXTRACT_OPTIONAL: &[(usize, &str)] = &[(7, "suppress"), (23, "RegDate"), (29, "VoterStatus")];

pub fn voter_schema() -> Result<Schema> {
    Ok(Schema::new("florida_voters", VOTER_COLUMNS.iter().copied(), "voter_id")?)
}

/// Tab-delimited column selection for the statewide extract.
pub fn voter_extract_columns() -> ColumnSelection {
    let selection = EXTRACT_REQUIRED
        .iter()
        .fold(ColumnSelection::new(b'\t'), |selection, (index, name)| {
            selection.required(*index, *name)
        });
    EXTRACT_OPTIONAL
        .iter()
        .fold(selection, |selection, (index, name)| {
            selection.optional(*index, *name)
        })
}

/// Normalizer for rows read through [`voter_extract_columns`].
#[derive(Debug, Clone)]
pub struct VoterNormalizer {
    schema: Schema,
    tables: VoterTables,
}

impl VoterNormalizer {
    pub fn new(tables: VoterTables) -> Result<Self> {
        Ok(Self {
            schema: voter_schema()?,
            tables,
        })
    }

    pub fn tables(&self) -> &VoterTables {
        &self.tables
    }
}

impl Normalizer for VoterNormalizer {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn normalize(&self, raw: &RawRecord) -> Result<CanonicalRecord> {
        let row_error = |source| NormalizeError::Row {
            row: raw.row(),
            source,
        };
        let field = |column: &str| raw.require(column).map(str::trim).map_err(row_error);
        let tables = &self.tables;

        let fields = vec![
            field("lname")?.to_string(),
            field("fname")?.to_string(),
            field("mname")?.to_string(),
            tables.suffix.lookup(field("suffix")?),
            collapse_whitespace(field("addr1")?),
            field("addr2")?.to_string(),
            field("city")?.to_string(),
            field("zip")?.to_string(),
            field("gender")?.to_string(),
            tables.race.lookup(field("race")?),
            field("birthdate")?.to_string(),
            tables.party.lookup(field("party")?),
            field("areacode")?.to_string(),
            field("phone")?.to_string(),
            field("email")?.to_string(),
            tables.exemption.lookup(raw.get("suppress").unwrap_or_default()),
            raw.get("RegDate").unwrap_or_default().trim().to_string(),
            tables.status.lookup(raw.get("VoterStatus").unwrap_or_default()),
            field("voter_ID")?.to_string(),
        ];
        self.schema.record(fields).map_err(row_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_selection_covers_every_raw_column() {
        let selection = voter_extract_columns();
        assert_eq!(selection.columns().len(), 19);
        assert_eq!(selection.delimiter(), b'\t');
        let optional: Vec<_> = selection
            .columns()
            .iter()
            .filter(|c| !c.required)
            .map(|c| c.index)
            .collect();
        assert_eq!(optional, vec![7, 23, 29]);
    }

    #[test]
    fn schema_ends_with_id() {
        let schema = voter_schema().expect("schema");
        assert_eq!(schema.width(), 19);
        assert_eq!(schema.id_column(), "voter_id");
    }
}
