//! Tampa bicycle citations spreadsheet.

use panda_model::{CanonicalRecord, RawRecord, Schema};
use panda_tables::citation::abbreviate_race;

use crate::Normalizer;
use crate::error::{NormalizeError, Result};
use crate::text::{ParentheticalStyle, compose_address, parenthetical};

pub const CITATION_COLUMNS: &[&str] = &[
    "lname",
    "fname",
    "mname",
    "suffix",
    "DOB",
    "race",
    "gender",
    "DL",
    "address",
    "date",
    "statute",
    "agency",
    "officer",
    "citation_id",
];

const ADDRESS_PARTS: &[&str] = &[
    "Address Line 1",
    "Address Line 2",
    "City",
    "State",
    "Zip Code",
];

pub fn citation_schema() -> Result<Schema> {
    Ok(Schema::new(
        "tampa_bike_citations",
        CITATION_COLUMNS.iter().copied(),
        "citation_id",
    )?)
}

#[derive(Debug, Clone)]
pub struct CitationNormalizer {
    schema: Schema,
    license_style: ParentheticalStyle,
}

impl CitationNormalizer {
    pub fn new(license_style: ParentheticalStyle) -> Result<Self> {
        Ok(Self {
            schema: citation_schema()?,
            license_style,
        })
    }
}

impl Normalizer for CitationNormalizer {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn normalize(&self, raw: &RawRecord) -> Result<CanonicalRecord> {
        let row_error = |source| NormalizeError::Row {
            row: raw.row(),
            source,
        };
        let field = |column: &str| raw.require(column).map(str::trim).map_err(row_error);

        let mut address = Vec::with_capacity(ADDRESS_PARTS.len());
        for column in ADDRESS_PARTS.iter().copied() {
            address.push(field(column)?);
        }

        let fields = vec![
            field("Last Name")?.to_string(),
            field("First Name")?.to_string(),
            field("Middle Name")?.to_string(),
            field("Suffix")?.to_string(),
            field("Date Of Birth")?.to_string(),
            abbreviate_race(field("Race")?),
            field("Gender")?.to_string(),
            parenthetical(
                field("Driver License Number")?,
                field("Driver License State")?,
                self.license_style,
            ),
            compose_address(address),
            field("Offense Date")?.to_string(),
            field("Statute Description")?.to_string(),
            field("Law Enf Agency Name")?.to_string(),
            field("Law Enf Officer Name")?.to_string(),
            field("ID")?.to_string(),
        ];
        self.schema.record(fields).map_err(row_error)
    }
}
