//! Dataset registration and descriptors.

use panda_model::{DatasetDescriptor, Probe};
use tracing::info;

use crate::error::ExportError;
use crate::sink::Sink;
use crate::slug::slugify;

pub const CATEGORY_ALL_DOB: &str = "/api/1.0/category/all-dob/";
pub const CATEGORY_VOTERS: &str = "/api/1.0/category/voters/";
pub const CATEGORY_CRIME: &str = "/api/1.0/category/crime/";
pub const CATEGORY_TRAFFIC_TICKETS: &str = "/api/1.0/category/traffic-tickets/";

/// Outcome of [`ensure_dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Created,
    Existing { row_count: u64 },
}

/// Create the dataset unless it already exists.
///
/// Probe-then-create is not atomic; only one writer per dataset is expected.
pub fn ensure_dataset<S>(
    sink: &mut S,
    descriptor: &DatasetDescriptor,
) -> Result<Registration, ExportError>
where
    S: Sink + ?Sized,
{
    let failed = |source| ExportError::Registration {
        dataset: descriptor.slug.clone(),
        source,
    };
    match sink.probe(&descriptor.slug).map_err(failed)? {
        Probe::Exists { row_count } => {
            info!(dataset = %descriptor.slug, row_count, "dataset exists");
            Ok(Registration::Existing { row_count })
        }
        Probe::NotFound => {
            sink.create(descriptor).map_err(failed)?;
            info!(
                dataset = %descriptor.slug,
                columns = descriptor.columns.len(),
                "dataset created"
            );
            Ok(Registration::Created)
        }
    }
}

fn descriptor(
    name: String,
    description: String,
    categories: &[&str],
    columns: &[String],
) -> DatasetDescriptor {
    DatasetDescriptor {
        slug: slugify(&name),
        name,
        description,
        categories: categories.iter().map(|c| (*c).to_string()).collect(),
        columns: columns.to_vec(),
    }
}

/// `"<County> voter registration <year>"`, described by the extract date.
pub fn voter_descriptor(
    county: &str,
    year: i32,
    data_date: &str,
    columns: &[String],
) -> DatasetDescriptor {
    descriptor(
        format!("{county} voter registration {year}"),
        format!("Data from {data_date}"),
        &[CATEGORY_ALL_DOB, CATEGORY_VOTERS],
        columns,
    )
}

pub fn citation_descriptor(columns: &[String]) -> DatasetDescriptor {
    descriptor(
        "Tampa bicycle citations 2003 to 2014".to_string(),
        "A list of bicycle citations in Hillsborough County from 2003 to 2014.".to_string(),
        &[CATEGORY_ALL_DOB, CATEGORY_CRIME, CATEGORY_TRAFFIC_TICKETS],
        columns,
    )
}
