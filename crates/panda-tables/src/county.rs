//! Florida county codes.
//!
//! Voter extract file names start with the three-letter county code
//! (`HIL_20250630.txt`), which also selects the dataset name.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use panda_model::{CodeTable, Fallback};
use serde::{Deserialize, Serialize};

pub const FL_COUNTIES: &[(&str, &str)] = &[
    ("ALA", "Alachua"),
    ("BAK", "Baker"),
    ("BAY", "Bay"),
    ("BRA", "Bradford"),
    ("BRE", "Brevard"),
    ("BRO", "Broward"),
    ("CAL", "Calhoun"),
    ("CHA", "Charlotte"),
    ("CIT", "Citrus"),
    ("CLA", "Clay"),
    ("CLL", "Collier"),
    ("CLM", "Columbia"),
    ("DAD", "Miami-Dade"),
    ("DES", "Desoto"),
    ("DIX", "Dixie"),
    ("DUV", "Duval"),
    ("ESC", "Escambia"),
    ("FLA", "Flagler"),
    ("FRA", "Franklin"),
    ("GAD", "Gadsden"),
    ("GIL", "Gilchrist"),
    ("GLA", "Glades"),
    ("GUL", "Gulf"),
    ("HAM", "Hamilton"),
    ("HAR", "Hardee"),
    ("HEN", "Hendry"),
    ("HER", "Hernando"),
    ("HIG", "Highlands"),
    ("HIL", "Hillsborough"),
    ("HOL", "Holmes"),
    ("IND", "Indian River"),
    ("JAC", "Jackson"),
    ("JEF", "Jefferson"),
    ("LAF", "Lafayette"),
    ("LAK", "Lake"),
    ("LEE", "Lee"),
    ("LEO", "Leon"),
    ("LEV", "Levy"),
    ("LIB", "Liberty"),
    ("MAD", "Madison"),
    ("MAN", "Manatee"),
    ("MON", "Monroe"),
    ("MRN", "Marion"),
    ("MRT", "Martin"),
    ("NAS", "Nassau"),
    ("OKA", "Okaloosa"),
    ("OKE", "Okeechobee"),
    ("ORA", "Orange"),
    ("OSC", "Osceola"),
    ("PAL", "PalmBeach"),
    ("PAS", "Pasco"),
    ("PIN", "Pinellas"),
    ("POL", "Polk"),
    ("PUT", "Putnam"),
    ("SAN", "SantaRosa"),
    ("SAR", "Sarasota"),
    ("SEM", "Seminole"),
    ("STJ", "St.Johns"),
    ("STL", "St.Lucie"),
    ("SUM", "Sumter"),
    ("SUW", "Suwannee"),
    ("TAY", "Taylor"),
    ("UNI", "Union"),
    ("VOL", "Volusia"),
    ("WAK", "Wakulla"),
    ("WAL", "Walton"),
    ("WAS", "Washington"),
];

/// Counties in the Tampa Bay regional reference database.
const MID_FLORIDA: &[&str] = &[
    "ALA", "BRE", "CHA", "CIT", "DES", "DUV", "HAR", "HER", "HIL", "LAK", "LEE", "LEO", "MAN",
    "MRN", "ORA", "PAS", "PIN", "POL", "SAR", "SEM",
];

/// Southern counties not covered by [`MID_FLORIDA`].
const SOUTH_FLORIDA: &[&str] = &["BRO", "CLL", "DAD", "GLA", "HEN", "MON", "MRT", "PAL"];

static COUNTIES: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| FL_COUNTIES.iter().copied().collect());

/// County name for a three-letter code.
pub fn county_name(code: &str) -> Option<&'static str> {
    COUNTIES.get(code).copied()
}

pub fn is_county_code(code: &str) -> bool {
    COUNTIES.contains_key(code)
}

/// County table for display, unknown codes pass through.
pub fn county_table() -> CodeTable {
    CodeTable::from_pairs("county", FL_COUNTIES.iter().copied(), Fallback::PassThrough)
}

/// Which counties a run harvests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    /// All 67 counties.
    #[default]
    Statewide,
    /// Tampa Bay regional reference set.
    MidFlorida,
    /// Southern counties outside the mid-Florida set.
    SouthFlorida,
}

impl Region {
    /// County codes in this region, in code order.
    pub fn codes(self) -> Vec<&'static str> {
        match self {
            Self::Statewide => FL_COUNTIES.iter().map(|(code, _)| *code).collect(),
            Self::MidFlorida => MID_FLORIDA.to_vec(),
            Self::SouthFlorida => SOUTH_FLORIDA.to_vec(),
        }
    }

    pub fn contains(self, code: &str) -> bool {
        match self {
            Self::Statewide => is_county_code(code),
            Self::MidFlorida => MID_FLORIDA.contains(&code),
            Self::SouthFlorida => SOUTH_FLORIDA.contains(&code),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Statewide => "statewide",
            Self::MidFlorida => "mid-florida",
            Self::SouthFlorida => "south-florida",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
