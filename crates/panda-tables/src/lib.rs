//! Compiled-in code tables for Florida voter extracts and citation files.
//!
//! Tables are plain `(code, label)` slices so a jurisdiction update touches
//! only this crate. [`VoterTables`] assembles them into [`CodeTable`]s
//! according to a per-dataset [`FallbackPolicy`].
//!
//! [`CodeTable`]: panda_model::CodeTable

#![deny(unsafe_code)]

pub mod citation;
pub mod county;
pub mod policy;
pub mod voter;

pub use county::{Region, county_name, is_county_code};
pub use policy::{FallbackPolicy, VoterTables};
