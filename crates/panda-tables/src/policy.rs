//! Per-dataset fallback policies.
//!
//! The loader scripts for different years disagreed on what an unknown
//! party code becomes (`""` in 2014, `"OTHER"` since 2023). The choice is a
//! property of the dataset, so it lives here instead of in the normalizer.

use panda_model::{CodeTable, Fallback};
use serde::{Deserialize, Serialize};

use crate::voter;

/// Fallbacks for the coded voter fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackPolicy {
    pub race: Fallback,
    pub party: Fallback,
    pub suffix: Fallback,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::florida()
    }
}

impl FallbackPolicy {
    /// Current statewide extract: unknown race blank, unknown party `OTHER`.
    pub fn florida() -> Self {
        Self {
            race: Fallback::Empty,
            party: Fallback::literal("OTHER"),
            suffix: Fallback::PassThrough,
        }
    }

    /// Pre-2023 extract: unknown party left blank.
    pub fn legacy() -> Self {
        Self {
            party: Fallback::Empty,
            ..Self::florida()
        }
    }

    #[must_use]
    pub fn with_party(mut self, fallback: Fallback) -> Self {
        self.party = fallback;
        self
    }
}

/// Every table the voter normalizer consults.
#[derive(Debug, Clone)]
pub struct VoterTables {
    pub race: CodeTable,
    pub party: CodeTable,
    pub suffix: CodeTable,
    pub exemption: CodeTable,
    pub status: CodeTable,
}

impl VoterTables {
    pub fn new(policy: &FallbackPolicy) -> Self {
        Self {
            race: voter::race_table(policy.race.clone()),
            party: voter::party_table(policy.party.clone()),
            suffix: voter::suffix_table(policy.suffix.clone()),
            exemption: voter::exemption_table(),
            status: voter::status_table(),
        }
    }
}

impl Default for VoterTables {
    fn default() -> Self {
        Self::new(&FallbackPolicy::default())
    }
}
