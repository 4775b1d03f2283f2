use panda_model::{Batch, BatchEntry, CanonicalRecord};

use crate::error::ExportError;

/// Split records into batches of at most `batch_size`, keeping order.
///
/// The trailing partial batch is kept; no records means no batches.
pub fn partition<F>(
    records: &[CanonicalRecord],
    id_fn: F,
    batch_size: usize,
) -> Result<Vec<Batch>, ExportError>
where
    F: Fn(&CanonicalRecord) -> String,
{
    if batch_size == 0 {
        return Err(ExportError::InvalidBatchSize);
    }
    let batches = records
        .chunks(batch_size)
        .enumerate()
        .map(|(index, chunk)| {
            let entries = chunk
                .iter()
                .map(|record| BatchEntry {
                    external_id: id_fn(record),
                    data: record.fields().to_vec(),
                })
                .collect();
            Batch::new(index, entries)
        })
        .collect();
    Ok(batches)
}
