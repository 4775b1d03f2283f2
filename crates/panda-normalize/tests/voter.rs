#![allow(missing_docs)]

use panda_model::{CanonicalRecord, Fallback, ModelError, RawRecord};
use panda_normalize::{NormalizeError, Normalizer, VoterNormalizer, prepare_records};
use panda_tables::{FallbackPolicy, VoterTables};
use proptest::prelude::*;

const REQUIRED: &[&str] = &[
    "lname", "fname", "mname", "suffix", "addr1", "addr2", "city", "zip", "gender", "race",
    "birthdate", "party", "areacode", "phone", "email", "voter_ID",
];

fn normalizer() -> VoterNormalizer {
    VoterNormalizer::new(VoterTables::default()).expect("voter normalizer")
}

fn row(overrides: &[(&str, &str)]) -> RawRecord {
    let mut raw = RawRecord::new(1);
    for column in REQUIRED {
        raw.insert(*column, "");
    }
    for (column, value) in overrides {
        raw.insert(*column, *value);
    }
    raw
}

fn field<'a>(normalizer: &VoterNormalizer, record: &'a CanonicalRecord, column: &str) -> &'a str {
    let index = normalizer.schema().position(column).expect("column in schema");
    record.field(index).expect("field present")
}

#[test]
fn normalizes_a_full_row() {
    let normalizer = normalizer();
    let raw = row(&[
        ("lname", " Smith "),
        ("fname", "Ann"),
        ("suffix", "jr"),
        ("addr1", "123   Main   St"),
        ("city", "Lakeland"),
        ("zip", "33801"),
        ("race", "5"),
        ("party", "DEM"),
        ("voter_ID", " 100234 "),
        ("suppress", "Y"),
        ("RegDate", " 01/02/2003 "),
        ("VoterStatus", "INA"),
    ]);
    let record = normalizer.normalize(&raw).expect("normalize");
    assert_eq!(record.len(), normalizer.schema().width());
    assert_eq!(field(&normalizer, &record, "lname"), "Smith");
    assert_eq!(field(&normalizer, &record, "suffix"), "Jr.");
    assert_eq!(field(&normalizer, &record, "addr1"), "123 Main St");
    assert_eq!(field(&normalizer, &record, "zipcode"), "33801");
    assert_eq!(field(&normalizer, &record, "race"), "WH");
    assert_eq!(field(&normalizer, &record, "party"), "Democratic");
    assert_eq!(field(&normalizer, &record, "exemption_requested"), "true");
    assert_eq!(field(&normalizer, &record, "registration_date"), "01/02/2003");
    assert_eq!(field(&normalizer, &record, "active"), "false");
    assert_eq!(field(&normalizer, &record, "voter_id"), "100234");
}

#[test]
fn race_codes_use_table_and_fallback() {
    let normalizer = normalizer();
    let unknown = normalizer.normalize(&row(&[("race", "9")])).expect("normalize");
    assert_eq!(field(&normalizer, &unknown, "race"), "Unknown");
    let invalid = normalizer.normalize(&row(&[("race", "X")])).expect("normalize");
    assert_eq!(field(&normalizer, &invalid, "race"), "");
}

#[test]
fn party_fallback_follows_policy() {
    let florida = normalizer();
    let record = florida.normalize(&row(&[("party", "ZZZ")])).expect("normalize");
    assert_eq!(field(&florida, &record, "party"), "OTHER");

    let legacy =
        VoterNormalizer::new(VoterTables::new(&FallbackPolicy::legacy())).expect("normalizer");
    let record = legacy.normalize(&row(&[("party", "ZZZ")])).expect("normalize");
    assert_eq!(field(&legacy, &record, "party"), "");

    let custom = FallbackPolicy::florida().with_party(Fallback::PassThrough);
    let passthrough = VoterNormalizer::new(VoterTables::new(&custom)).expect("normalizer");
    let record = passthrough.normalize(&row(&[("party", "ZZZ")])).expect("normalize");
    assert_eq!(field(&passthrough, &record, "party"), "ZZZ");
}

#[test]
fn pre_2023_rows_use_defaults_for_optional_columns() {
    let normalizer = normalizer();
    let record = normalizer.normalize(&row(&[])).expect("normalize");
    assert_eq!(field(&normalizer, &record, "exemption_requested"), "false");
    assert_eq!(field(&normalizer, &record, "registration_date"), "");
    assert_eq!(field(&normalizer, &record, "active"), "true");
}

#[test]
fn unknown_suffix_passes_through() {
    let normalizer = normalizer();
    let record = normalizer.normalize(&row(&[("suffix", " MD ")])).expect("normalize");
    assert_eq!(field(&normalizer, &record, "suffix"), "MD");
}

#[test]
fn absent_required_column_names_column_and_row() {
    let normalizer = normalizer();
    let mut raw = RawRecord::new(42);
    for column in REQUIRED.iter().filter(|c| **c != "zip") {
        raw.insert(*column, "x");
    }
    let err = normalizer.normalize(&raw).unwrap_err();
    assert_eq!(
        err,
        NormalizeError::Row {
            row: 42,
            source: ModelError::MissingColumn {
                column: "zip".to_string(),
                row: 42,
            },
        }
    );
}

#[test]
fn prepare_sorts_deterministically() {
    let normalizer = normalizer();
    let raws = vec![
        row(&[("lname", "Smith"), ("fname", "Bo"), ("voter_ID", "1")]),
        row(&[("lname", "Adams"), ("voter_ID", "2")]),
        row(&[("lname", "Smith"), ("fname", "Al"), ("voter_ID", "3")]),
    ];
    let first = prepare_records(&normalizer, &raws).expect("prepare");
    let mut reversed = raws.clone();
    reversed.reverse();
    let second = prepare_records(&normalizer, &reversed).expect("prepare");
    assert_eq!(first, second);
    let order: Vec<_> = first.iter().map(|r| field(&normalizer, r, "voter_id")).collect();
    assert_eq!(order, vec!["2", "3", "1"]);
}

#[test]
fn prepare_stops_at_first_bad_row() {
    let normalizer = normalizer();
    let mut bad = RawRecord::new(2);
    bad.insert("lname", "Jones");
    let raws = vec![row(&[("lname", "Smith")]), bad];
    let err = prepare_records(&normalizer, &raws).unwrap_err();
    assert!(matches!(err, NormalizeError::Row { row: 2, .. }));
}

proptest! {
    #[test]
    fn every_complete_row_fits_the_schema(
        values in proptest::collection::vec(".{0,12}", REQUIRED.len()),
        optional in proptest::option::of(("[NY ]{0,2}", ".{0,10}", "(ACT|INA|)")),
    ) {
        let normalizer = normalizer();
        let mut raw = RawRecord::new(1);
        for (column, value) in REQUIRED.iter().zip(&values) {
            raw.insert(*column, value.clone());
        }
        if let Some((suppress, reg_date, status)) = optional {
            raw.insert("suppress", suppress);
            raw.insert("RegDate", reg_date);
            raw.insert("VoterStatus", status);
        }
        let record = normalizer.normalize(&raw).expect("complete row normalizes");
        prop_assert_eq!(record.len(), normalizer.schema().width());
    }

    #[test]
    fn address_line_has_no_whitespace_runs(addr in "[ \\tA-Za-z0-9]{0,30}") {
        let normalizer = normalizer();
        let record = normalizer.normalize(&row(&[("addr1", addr.as_str())])).expect("normalize");
        let addr1 = field(&normalizer, &record, "addr1");
        prop_assert!(!addr1.contains("  "));
        prop_assert_eq!(addr1.trim(), addr1);
    }
}
