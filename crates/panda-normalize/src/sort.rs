//! Whole-file sorting.

use panda_model::{CanonicalRecord, RawRecord, Schema};
use tracing::debug;

use crate::Normalizer;
use crate::error::{NormalizeError, Result};

/// Sort records by last name, then by every later field.
///
/// Every record is checked against the schema width before sorting; the
/// first mismatch fails the whole set.
pub fn sort_records(
    mut records: Vec<CanonicalRecord>,
    schema: &Schema,
) -> Result<Vec<CanonicalRecord>> {
    for (position, record) in records.iter().enumerate() {
        schema
            .check(record)
            .map_err(|source| NormalizeError::Record { position, source })?;
    }
    records.sort();
    Ok(records)
}

/// Normalize every row of a file, then sort.
///
/// Stops at the first malformed row.
pub fn prepare_records<N>(normalizer: &N, raws: &[RawRecord]) -> Result<Vec<CanonicalRecord>>
where
    N: Normalizer + ?Sized,
{
    let records = raws
        .iter()
        .map(|raw| normalizer.normalize(raw))
        .collect::<Result<Vec<_>>>()?;
    debug!(
        schema = normalizer.schema().name(),
        records = records.len(),
        "normalized rows"
    );
    sort_records(records, normalizer.schema())
}
