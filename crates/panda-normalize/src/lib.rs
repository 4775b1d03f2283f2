//! Row normalization and sorting.
//!
//! A [`Normalizer`] turns one [`RawRecord`](panda_model::RawRecord) into a
//! schema-ordered [`CanonicalRecord`](panda_model::CanonicalRecord). Two
//! datasets are supported:
//!
//! - [`VoterNormalizer`]: the Florida statewide voter extract
//! - [`CitationNormalizer`]: the Tampa bicycle citations spreadsheet
//!
//! [`prepare_records`] normalizes a whole file and sorts it with
//! [`sort_records`].

mod citation;
mod error;
mod sort;
pub mod text;
mod voter;

pub use citation::{CitationNormalizer, citation_schema};
pub use error::{NormalizeError, Result};
pub use sort::{prepare_records, sort_records};
pub use text::ParentheticalStyle;
pub use voter::{VoterNormalizer, voter_extract_columns, voter_schema};

use panda_model::{CanonicalRecord, RawRecord, Schema};

/// Maps raw source rows onto one canonical schema.
pub trait Normalizer {
    /// Output schema of every record this normalizer produces.
    fn schema(&self) -> &Schema;

    /// Normalize one row. Pure: no IO, no logging of row values.
    fn normalize(&self, raw: &RawRecord) -> Result<CanonicalRecord>;
}
