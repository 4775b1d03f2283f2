pub mod code_table;
pub mod error;
pub mod export;
pub mod record;

pub use code_table::{CodeTable, Fallback, KeyMatch};
pub use error::{ModelError, Result};
pub use export::{Batch, BatchEntry, DatasetDescriptor, ExportSummary, Probe};
pub use record::{CanonicalRecord, RawRecord, Schema};
