//! Static code-to-label lookup tables.
//!
//! County extracts carry short codes (`"5"` for race, `"DEM"` for party,
//! `"JR"` for a name suffix). A [`CodeTable`] maps each code to the label
//! that ends up in the load file.
//!
//! ## Unknown codes
//!
//! Every table names its own [`Fallback`]. An unknown code is never an
//! error and is never dropped silently; it resolves to whatever the
//! fallback says:
//!
//! - [`Fallback::Empty`]: the field becomes `""` (voter race)
//! - [`Fallback::Literal`]: a fixed label such as `"OTHER"` (voter party)
//! - [`Fallback::PassThrough`]: the trimmed input is kept (name suffix)

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Resolution for codes that are not in a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// Unknown codes become an empty string.
    Empty,
    /// Unknown codes become a fixed label.
    Literal(String),
    /// Unknown codes are kept as given (trimmed).
    PassThrough,
}

impl Fallback {
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    fn resolve(&self, code: &str) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Literal(value) => value.clone(),
            Self::PassThrough => code.to_string(),
        }
    }
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Literal(value) => write!(f, "literal {value:?}"),
            Self::PassThrough => write!(f, "pass-through"),
        }
    }
}

/// How input codes are matched against table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyMatch {
    /// Byte-exact match after trimming.
    #[default]
    Exact,
    /// ASCII case-insensitive match after trimming.
    IgnoreAsciiCase,
}

/// Immutable code-to-label table with an explicit fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeTable {
    /// Table name used in logs (e.g. "race").
    pub name: String,

    /// Matching rule for lookups.
    pub key_match: KeyMatch,

    /// What unknown codes resolve to.
    pub fallback: Fallback,

    /// Key: code (uppercased for [`KeyMatch::IgnoreAsciiCase`]).
    entries: BTreeMap<String, String>,
}

impl CodeTable {
    pub fn new(name: impl Into<String>, fallback: Fallback) -> Self {
        Self {
            name: name.into(),
            key_match: KeyMatch::Exact,
            fallback,
            entries: BTreeMap::new(),
        }
    }

    /// Build a table from `(code, label)` pairs.
    pub fn from_pairs<I, K, V>(name: impl Into<String>, pairs: I, fallback: Fallback) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::new(name, fallback);
        for (code, label) in pairs {
            table.insert(code.as_ref(), label);
        }
        table
    }

    /// Switch to case-insensitive matching. Existing keys are re-folded.
    #[must_use]
    pub fn ignore_ascii_case(mut self) -> Self {
        self.key_match = KeyMatch::IgnoreAsciiCase;
        self.entries = std::mem::take(&mut self.entries)
            .into_iter()
            .map(|(code, label)| (code.to_ascii_uppercase(), label))
            .collect();
        self
    }

    /// Replace the fallback, keeping the entries.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn insert(&mut self, code: &str, label: impl Into<String>) {
        let key = self.key(code);
        self.entries.insert(key, label.into());
    }

    /// Label for a known code, `None` otherwise.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(&self.key(code)).map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(&self.key(code))
    }

    /// Resolve a raw code: the label when known, the fallback otherwise.
    pub fn lookup(&self, code: &str) -> String {
        match self.get(code) {
            Some(label) => label.to_string(),
            None => self.fallback.resolve(code.trim()),
        }
    }

    /// Codes and labels in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, label)| (code.as_str(), label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key(&self, code: &str) -> String {
        let trimmed = code.trim();
        match self.key_match {
            KeyMatch::Exact => trimmed.to_string(),
            KeyMatch::IgnoreAsciiCase => trimmed.to_ascii_uppercase(),
        }
    }
}
