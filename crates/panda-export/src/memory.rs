//! In-memory sink.

use std::collections::BTreeMap;

use panda_model::{Batch, DatasetDescriptor, Probe};

use crate::error::SinkError;
use crate::sink::Sink;

#[derive(Debug, Clone, Default)]
struct StoredDataset {
    descriptor: Option<DatasetDescriptor>,
    rows: BTreeMap<String, Vec<String>>,
}

/// Upsert store keyed by dataset slug, then external id.
///
/// Used for dry runs. Upserting into an unregistered dataset creates it
/// without a descriptor.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    datasets: BTreeMap<String, StoredDataset>,
    upsert_calls: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows stored for `slug`, keyed by external id.
    pub fn rows(&self, slug: &str) -> Option<&BTreeMap<String, Vec<String>>> {
        self.datasets.get(slug).map(|dataset| &dataset.rows)
    }

    pub fn row_count(&self, slug: &str) -> usize {
        self.rows(slug).map_or(0, BTreeMap::len)
    }

    pub fn descriptor(&self, slug: &str) -> Option<&DatasetDescriptor> {
        self.datasets
            .get(slug)
            .and_then(|dataset| dataset.descriptor.as_ref())
    }

    /// Number of `upsert_batch` calls received.
    pub fn upsert_calls(&self) -> usize {
        self.upsert_calls
    }

    pub fn datasets(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }
}

impl Sink for MemorySink {
    fn probe(&mut self, slug: &str) -> Result<Probe, SinkError> {
        Ok(match self.datasets.get(slug) {
            Some(dataset) => Probe::Exists {
                row_count: dataset.rows.len() as u64,
            },
            None => Probe::NotFound,
        })
    }

    fn create(&mut self, descriptor: &DatasetDescriptor) -> Result<(), SinkError> {
        self.datasets
            .entry(descriptor.slug.clone())
            .or_default()
            .descriptor = Some(descriptor.clone());
        Ok(())
    }

    fn upsert_batch(&mut self, slug: &str, batch: &Batch) -> Result<(), SinkError> {
        self.upsert_calls += 1;
        let dataset = self.datasets.entry(slug.to_string()).or_default();
        for entry in &batch.entries {
            dataset
                .rows
                .insert(entry.external_id.clone(), entry.data.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use panda_model::BatchEntry;

    use super::*;

    fn batch(ids: &[&str]) -> Batch {
        let entries = ids
            .iter()
            .map(|id| BatchEntry {
                external_id: (*id).to_string(),
                data: vec![format!("row {id}")],
            })
            .collect();
        Batch::new(0, entries)
    }

    #[test]
    fn upsert_replaces_by_id() {
        let mut sink = MemorySink::new();
        sink.upsert_batch("people", &batch(&["1", "2"])).expect("upsert");
        sink.upsert_batch("people", &batch(&["2", "3"])).expect("upsert");
        assert_eq!(sink.row_count("people"), 3);
        assert_eq!(sink.upsert_calls(), 2);
    }

    #[test]
    fn probe_reflects_created_datasets() {
        let mut sink = MemorySink::new();
        assert_eq!(sink.probe("people").expect("probe"), Probe::NotFound);
        sink.upsert_batch("people", &batch(&["1"])).expect("upsert");
        assert_eq!(
            sink.probe("people").expect("probe"),
            Probe::Exists { row_count: 1 }
        );
        assert!(sink.descriptor("people").is_none());
    }
}
