#![allow(missing_docs)]

use panda_model::Fallback;
use panda_tables::voter::{history_table, party_table, race_table};
use panda_tables::{FallbackPolicy, Region, VoterTables, county_name, is_county_code};

#[test]
fn test_race_known_and_unknown() {
    let race = race_table(Fallback::Empty);
    assert_eq!(race.lookup("9"), "Unknown");
    assert_eq!(race.lookup("3"), "BL");
    assert_eq!(race.lookup("8"), ""); // No code 8
    assert_eq!(race.lookup("X"), "");
}

#[test]
fn test_party_includes_retired_codes() {
    let party = party_table(Fallback::literal("OTHER"));
    assert_eq!(party.lookup("REP"), "Republican");
    assert_eq!(party.lookup("NO PARTY"), "no party (deprecated)");
    assert_eq!(party.lookup("PFP"), "Peace & Freedom");
    assert_eq!(party.lookup("ZZZ"), "OTHER");
}

#[test]
fn test_policies_differ_on_party() {
    let current = VoterTables::new(&FallbackPolicy::florida());
    let legacy = VoterTables::new(&FallbackPolicy::legacy());
    assert_eq!(current.party.lookup("ZZZ"), "OTHER");
    assert_eq!(legacy.party.lookup("ZZZ"), "");
    assert_eq!(current.race.lookup("X"), legacy.race.lookup("X"));
}

#[test]
fn test_voter_tables_defaults() {
    let tables = VoterTables::default();
    assert_eq!(tables.suffix.lookup("jr"), "Jr.");
    assert_eq!(tables.suffix.lookup("MD"), "MD");
    assert_eq!(tables.exemption.lookup("Y"), "true");
    assert_eq!(tables.exemption.lookup(""), "false");
    assert_eq!(tables.status.lookup("INA"), "false");
    assert_eq!(tables.status.lookup(""), "true");
}

#[test]
fn test_history_codes() {
    let history = history_table();
    assert_eq!(history.lookup("E"), "Voted Early");
    assert_eq!(history.len(), 7);
}

#[test]
fn test_counties() {
    assert_eq!(county_name("HIL"), Some("Hillsborough"));
    assert_eq!(county_name("DAD"), Some("Miami-Dade"));
    assert_eq!(county_name("XXX"), None);
    assert!(is_county_code("WAS"));
    assert!(Region::MidFlorida.contains("PIN"));
    assert!(!Region::MidFlorida.contains("BRO"));
    assert!(Region::Statewide.contains("BRO"));
    assert_eq!(Region::SouthFlorida.codes().len(), 8);
}
