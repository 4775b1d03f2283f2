//! Batched export of a sorted record set.

use std::time::Instant;

use panda_model::{CanonicalRecord, ExportSummary, Schema};
use tracing::{info, warn};

use crate::batch::partition;
use crate::error::ExportError;
use crate::sink::Sink;

/// Records per upsert call.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub batch_size: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// External id taken from the schema's id column.
pub fn schema_id(schema: &Schema) -> impl Fn(&CanonicalRecord) -> String + '_ {
    move |record| schema.external_id(record).to_string()
}

/// Send `records` to `dataset` in batches.
///
/// See [`export_with_progress`].
pub fn export<S, F>(
    sink: &mut S,
    dataset: &str,
    records: &[CanonicalRecord],
    id_fn: F,
    options: &ExportOptions,
    summary: &mut ExportSummary,
) -> Result<(), ExportError>
where
    S: Sink + ?Sized,
    F: Fn(&CanonicalRecord) -> String,
{
    export_with_progress(sink, dataset, records, id_fn, options, summary, |_| {})
}

/// Send `records` to `dataset` in batches, calling `progress` after each
/// batch the sink confirms.
///
/// The first rejected batch stops the run. `summary` then holds only the
/// committed work, and its elapsed time is set on success and failure
/// alike.
pub fn export_with_progress<S, F, P>(
    sink: &mut S,
    dataset: &str,
    records: &[CanonicalRecord],
    id_fn: F,
    options: &ExportOptions,
    summary: &mut ExportSummary,
    mut progress: P,
) -> Result<(), ExportError>
where
    S: Sink + ?Sized,
    F: Fn(&CanonicalRecord) -> String,
    P: FnMut(&ExportSummary),
{
    let start = Instant::now();
    let result = send_batches(sink, dataset, records, id_fn, options, summary, &mut progress);
    summary.elapsed = start.elapsed();
    result
}

fn send_batches<S, F, P>(
    sink: &mut S,
    dataset: &str,
    records: &[CanonicalRecord],
    id_fn: F,
    options: &ExportOptions,
    summary: &mut ExportSummary,
    progress: &mut P,
) -> Result<(), ExportError>
where
    S: Sink + ?Sized,
    F: Fn(&CanonicalRecord) -> String,
    P: FnMut(&ExportSummary),
{
    let batches = partition(records, id_fn, options.batch_size)?;
    info!(
        dataset,
        records = records.len(),
        batches = batches.len(),
        "exporting"
    );
    for batch in &batches {
        if let Err(source) = sink.upsert_batch(dataset, batch) {
            warn!(dataset, batch = batch.index, error = %source, "batch rejected");
            return Err(ExportError::Batch {
                index: batch.index,
                records: batch.len(),
                committed: summary.processed,
                source,
            });
        }
        summary.commit(batch.len());
        info!(
            dataset,
            batch = batch.index,
            records = batch.len(),
            processed = summary.processed,
            "batch committed"
        );
        progress(summary);
    }
    Ok(())
}
