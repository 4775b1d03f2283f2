//! Dataset registration and batched, idempotent export.
//!
//! Records are shipped to a [`Sink`] in bounded [`Batch`](panda_model::Batch)es
//! keyed by a stable external id, so re-running an export replaces rows
//! instead of duplicating them.
//!
//! # Sinks
//!
//! - [`PandaSink`]: the PANDA REST API over blocking HTTP
//! - [`MemorySink`]: an in-memory upsert store for dry runs and tests
//!
//! # Example
//!
//! ```ignore
//! use panda_export::{ExportOptions, MemorySink, ensure_dataset, export, schema_id};
//! use panda_model::ExportSummary;
//!
//! let mut sink = MemorySink::new();
//! ensure_dataset(&mut sink, &descriptor)?;
//! let mut summary = ExportSummary::new(&descriptor.slug);
//! export(&mut sink, &descriptor.slug, &records, schema_id(&schema), &ExportOptions::default(), &mut summary)?;
//! ```

mod batch;
mod error;
mod exporter;
mod memory;
mod panda;
mod registration;
mod sink;
mod slug;

// === Error Types ===
pub use error::{ExportError, SinkError};

// === Sinks ===
pub use memory::MemorySink;
pub use panda::{BULK_LIMIT, PandaCredentials, PandaSink};
pub use sink::Sink;

// === Export ===
pub use batch::partition;
pub use exporter::{DEFAULT_BATCH_SIZE, ExportOptions, export, export_with_progress, schema_id};

// === Registration ===
pub use registration::{
    CATEGORY_ALL_DOB, CATEGORY_CRIME, CATEGORY_TRAFFIC_TICKETS, CATEGORY_VOTERS, Registration,
    citation_descriptor, ensure_dataset, voter_descriptor,
};
pub use slug::slugify;
