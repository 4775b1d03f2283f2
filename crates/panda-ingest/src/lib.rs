//! Raw input and load-file IO for the PANDA loaders.
//!
//! # Features
//!
//! - **Column selection**: pick 1-based positional columns out of a
//!   header-less, tab-delimited county extract and name them
//! - **Named CSV**: read a header-named CSV, stripping byte-order marks
//! - **Load files**: write sorted canonical records with a schema header and
//!   read them back for export
//! - **Discovery**: list non-dot files and pick county extracts by prefix
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use panda_ingest::{ColumnSelection, read_positional};
//!
//! let selection = ColumnSelection::parse("3,5,2", &["lname", "fname", "voter_ID"], b'\t')?;
//! let rows = read_positional(Path::new("HIL_20250630.txt"), &selection)?;
//! ```

mod columns;
mod decode;
mod discovery;
mod error;
mod load_file;
mod named;

// === Error Types ===
pub use error::{IngestError, Result};

// === Raw Reading ===
pub use columns::{ColumnSelection, SelectedColumn, read_positional};
pub use decode::{decode_field, normalize_header};
pub use named::read_named_csv;

// === Load Files ===
pub use load_file::{read_load_file, write_load_file};

// === File Discovery ===
pub use discovery::{CountyFile, discover_county_files, file_prefix, list_data_files};
