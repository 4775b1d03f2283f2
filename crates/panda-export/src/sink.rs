use panda_model::{Batch, DatasetDescriptor, Probe};

use crate::error::SinkError;

/// Destination of registration and upsert calls.
///
/// Implementations must upsert by external id: sending an id that already
/// exists replaces the stored row.
pub trait Sink {
    /// Check whether the dataset exists.
    fn probe(&mut self, slug: &str) -> Result<Probe, SinkError>;

    /// Create the dataset described by `descriptor`.
    fn create(&mut self, descriptor: &DatasetDescriptor) -> Result<(), SinkError>;

    /// Send one batch as a single bulk upsert.
    fn upsert_batch(&mut self, slug: &str, batch: &Batch) -> Result<(), SinkError>;
}
