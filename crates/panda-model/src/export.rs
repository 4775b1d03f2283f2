//! Types exchanged between the exporter and a sink.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One record as the sink receives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Upsert key. Re-sending the same id replaces the stored row.
    pub external_id: String,
    /// Canonical fields in schema order.
    pub data: Vec<String>,
}

/// A bounded, ordered group of records sent in a single sink call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// 0-based position of this batch within its export run.
    #[serde(skip)]
    pub index: usize,
    /// Entries in sort order. Serialized as the `objects` array.
    #[serde(rename = "objects")]
    pub entries: Vec<BatchEntry>,
}

impl Batch {
    pub fn new(index: usize, entries: Vec<BatchEntry>) -> Self {
        Self { index, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn external_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.external_id.as_str())
    }
}

/// Running counts for one export run.
///
/// Counters only move after a batch is confirmed by the sink, so they always
/// describe committed work.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Dataset slug the run wrote to.
    pub dataset: String,
    /// Records confirmed by the sink.
    pub processed: usize,
    /// Batches confirmed by the sink.
    pub batches: usize,
    /// Wall-clock time from start to completion (or failure).
    pub elapsed: Duration,
}

impl ExportSummary {
    pub fn new(dataset: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            ..Self::default()
        }
    }

    /// Record a confirmed batch of `records` rows.
    pub fn commit(&mut self, records: usize) {
        self.processed += records;
        self.batches += 1;
    }
}

/// Dataset registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    /// Human-readable dataset name.
    pub name: String,
    /// URL slug the sink addresses the dataset by.
    #[serde(skip)]
    pub slug: String,
    pub description: String,
    /// Category resource URIs.
    pub categories: Vec<String>,
    /// Column names in schema order. Sent separately from the body.
    #[serde(skip)]
    pub columns: Vec<String>,
}

/// Result of an existence probe against the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Exists { row_count: u64 },
    NotFound,
}
