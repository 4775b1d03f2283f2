#![allow(missing_docs)]

use panda_model::RawRecord;
use panda_normalize::{CitationNormalizer, Normalizer, ParentheticalStyle};

const HEADERS: &[&str] = &[
    "Last Name",
    "First Name",
    "Middle Name",
    "Suffix",
    "Date Of Birth",
    "Race",
    "Gender",
    "Driver License Number",
    "Driver License State",
    "Address Line 1",
    "Address Line 2",
    "City",
    "State",
    "Zip Code",
    "Offense Date",
    "Statute Description",
    "Law Enf Agency Name",
    "Law Enf Officer Name",
    "ID",
];

fn row(values: &[(&str, &str)]) -> RawRecord {
    let mut raw = RawRecord::new(2);
    for header in HEADERS {
        raw.insert(*header, "");
    }
    for (header, value) in values {
        raw.insert(*header, *value);
    }
    raw
}

fn column(normalizer: &CitationNormalizer, name: &str) -> usize {
    normalizer.schema().position(name).expect("column")
}

#[test]
fn builds_composite_fields() {
    let normalizer = CitationNormalizer::new(ParentheticalStyle::default()).expect("normalizer");
    let raw = row(&[
        ("Last Name", "Jones "),
        ("Race", "Black"),
        ("Driver License Number", "J520-123"),
        ("Driver License State", "FL"),
        ("Address Line 1", "123 Main St"),
        ("City", "Tampa"),
        ("State", "FL"),
        ("Zip Code", "33602"),
        ("ID", "77"),
    ]);
    let record = normalizer.normalize(&raw).expect("normalize");
    assert_eq!(record.len(), 14);
    assert_eq!(record.field(0), Some("Jones"));
    assert_eq!(record.field(column(&normalizer, "race")), Some("Bl"));
    assert_eq!(record.field(column(&normalizer, "DL")), Some("J520-123 (FL)"));
    assert_eq!(
        record.field(column(&normalizer, "address")),
        Some("123 Main St, Tampa, FL, 33602")
    );
    assert_eq!(normalizer.schema().external_id(&record), "77");
}

#[test]
fn empty_license_state_keeps_parentheses_by_default() {
    let raw = row(&[("Driver License Number", "J520"), ("Race", "White")]);

    let keep = CitationNormalizer::new(ParentheticalStyle::KeepEmpty).expect("normalizer");
    let record = keep.normalize(&raw).expect("normalize");
    assert_eq!(record.field(column(&keep, "DL")), Some("J520 ()"));
    assert_eq!(record.field(column(&keep, "race")), Some("Wh"));

    let omit = CitationNormalizer::new(ParentheticalStyle::OmitEmpty).expect("normalizer");
    let record = omit.normalize(&raw).expect("normalize");
    assert_eq!(record.field(column(&omit, "DL")), Some("J520"));
}

#[test]
fn empty_address_is_empty() {
    let normalizer = CitationNormalizer::new(ParentheticalStyle::default()).expect("normalizer");
    let record = normalizer.normalize(&row(&[])).expect("normalize");
    assert_eq!(record.field(column(&normalizer, "address")), Some(""));
}

#[test]
fn missing_header_is_an_error() {
    let normalizer = CitationNormalizer::new(ParentheticalStyle::default()).expect("normalizer");
    let raw = RawRecord::from_pairs(5, [("Last Name", "Jones")]);
    let err = normalizer.normalize(&raw).unwrap_err();
    assert!(err.to_string().contains("row 5"), "{err}");
}
