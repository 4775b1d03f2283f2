//! Tampa citation spreadsheet conventions.

/// Race spellings shortened the same way as the voter `BL`/`WH`
/// codes, so name searches for "Black" or "White" stay precise.
pub const RACE_ABBREVIATIONS: &[(&str, &str)] = &[("White", "Wh"), ("Black", "Bl")];

/// Apply [`RACE_ABBREVIATIONS`] to a race value.
pub fn abbreviate_race(value: &str) -> String {
    RACE_ABBREVIATIONS
        .iter()
        .fold(value.to_string(), |acc, (from, to)| acc.replace(from, to))
}
