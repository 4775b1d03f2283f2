//! Florida Division of Elections voter extract codes.

use panda_model::{CodeTable, Fallback};

/// Race codes. There is no code 8.
///
/// Black and White are stored as `BL` and `WH` so that searching for people
/// named "Black" or "White" does not match every row.
pub const RACE: &[(&str, &str)] = &[
    ("1", "American Indian or Alaskan Native"),
    ("2", "Asian or Pacific Islander"),
    ("3", "BL"),
    ("4", "Hispanic"),
    ("5", "WH"),
    ("6", "Other"),
    ("7", "Multiracial"),
    ("9", "Unknown"),
];

/// Party codes registered in Florida as of June 2025, followed by retired
/// abbreviations still found in older extracts.
pub const PARTY: &[(&str, &str)] = &[
    ("AMF", "America First"),
    ("ASP", "American Solidarity"),
    ("BPP", "Boricua"),
    ("CPP", "Coalition With a Purpose"),
    ("CPF", "Constitution"),
    ("CSV", "Conservative"),
    ("DEM", "Democratic"),
    ("ECO", "Ecology"),
    ("FFP", "Florida Forward"),
    ("GRE", "Green"),
    ("IND", "Independent"),
    ("JEF", "Jeffersonian"),
    ("LPF", "Libertarian"),
    ("MGT", "MGTOW"),
    ("NAT", "Florida Natural Law"),
    ("NPA", "no party"),
    ("PSL", "Socialism and Liberation"),
    ("RFM", "Reform"),
    ("REP", "Republican"),
    ("UPF", "Unity"),
    ("PEO", "People\u{2019}s"),
    // retired
    ("REF", "Reform"),
    ("AIP", "American's"),
    ("FPP", "Pirate"),
    ("FSW", "Socialist Workers"),
    ("IDP", "Independence Party"),
    ("INT", "Independent Party (deprecated)"),
    ("JPF", "Justice"),
    ("NO PARTY", "no party (deprecated)"),
    ("NP", "no party (deprecated)"),
    ("PEACE & FREEDOM", "Peace & Freedom"),
    ("PFP", "Peace & Freedom"),
    ("TPF", "Tea Party"),
];

/// Name suffixes, keyed by their uppercase spelling.
pub const SUFFIX: &[(&str, &str)] = &[
    ("II", "II"),
    ("III", "III"),
    ("IV", "IV"),
    ("V", "V"),
    ("VI", "VI"),
    ("JR", "Jr."),
    ("JR.", "Jr."),
    ("SR", "Sr."),
    ("SR.", "Sr."),
    ("ESQ", "Esq."),
    ("ESQ.", "Esq."),
    ("1ST", "1st"),
    ("2ND", "2nd"),
    ("3RD", "3rd"),
    ("3D", "3rd"),
    ("4TH", "4th"),
    ("5TH", "5th"),
    ("6TH", "6th"),
];

/// Vote history codes from the companion history extract.
pub const HISTORY: &[(&str, &str)] = &[
    ("A", "Voted by Mail"),
    ("B", "Vote-by-Mail Ballot Not Counted"),
    ("E", "Voted Early"),
    ("L", "Vote-by-Mail Ballot Not Counted, Received Late"),
    (
        "N",
        "Did Not Vote (not all counties use this code nor are required to report this data)",
    ),
    ("P", "Provisional Ballot Not Counted"),
    ("Y", "Voted at Polls"),
];

/// Public records exemption flag (column 7).
pub const EXEMPTION: &[(&str, &str)] = &[("N", "false"), ("Y", "true")];

/// Voter status (column 29).
pub const VOTER_STATUS: &[(&str, &str)] = &[("ACT", "true"), ("INA", "false")];

pub fn race_table(fallback: Fallback) -> CodeTable {
    CodeTable::from_pairs("race", RACE.iter().copied(), fallback)
}

pub fn party_table(fallback: Fallback) -> CodeTable {
    CodeTable::from_pairs("party", PARTY.iter().copied(), fallback)
}

pub fn suffix_table(fallback: Fallback) -> CodeTable {
    CodeTable::from_pairs("suffix", SUFFIX.iter().copied(), fallback).ignore_ascii_case()
}

pub fn history_table() -> CodeTable {
    CodeTable::from_pairs("history", HISTORY.iter().copied(), Fallback::Empty)
}

/// Missing or unknown flags read as "not exempt".
pub fn exemption_table() -> CodeTable {
    CodeTable::from_pairs("exemption", EXEMPTION.iter().copied(), Fallback::literal("false"))
}

/// Missing or unknown status reads as active.
pub fn status_table() -> CodeTable {
    CodeTable::from_pairs("status", VOTER_STATUS.iter().copied(), Fallback::literal("true"))
}
