//! PANDA REST API sink.
//!
//! Datasets live at `<base>/api/1.0/dataset/<slug>/` and their rows at
//! `<dataset>/data/`. Every request carries the `email` and `api_key`
//! credentials as query parameters.

use std::time::Duration;

use panda_model::{Batch, DatasetDescriptor, Probe};
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use tracing::debug;

use crate::error::SinkError;
use crate::sink::Sink;

/// Most objects the API accepts in one bulk upsert.
pub const BULK_LIMIT: usize = 1000;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const API_PATH: &str = "api/1.0/";

/// Account used to authenticate API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct PandaCredentials {
    pub email: String,
    pub api_key: String,
}

impl std::fmt::Debug for PandaCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PandaCredentials")
            .field("email", &self.email)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct DatasetInfo {
    #[serde(default)]
    row_count: Option<u64>,
}

/// Blocking HTTP client for one PANDA instance.
#[derive(Debug)]
pub struct PandaSink {
    client: Client,
    api: Url,
    credentials: PandaCredentials,
}

impl PandaSink {
    /// Create a sink for the instance at `base` (e.g. `http://panda.example.org`).
    pub fn new(base: &str, credentials: PandaCredentials) -> Result<Self, SinkError> {
        Self::with_timeout(base, credentials, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        base: &str,
        credentials: PandaCredentials,
        timeout: Duration,
    ) -> Result<Self, SinkError> {
        let root = format!("{}/", base.trim_end_matches('/'));
        let api = Url::parse(&root)
            .and_then(|root| root.join(API_PATH))
            .map_err(|e| SinkError::InvalidUrl {
                url: base.to_string(),
                reason: e.to_string(),
            })?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api,
            credentials,
        })
    }

    /// API root, always ending in `/api/1.0/`.
    pub fn api_url(&self) -> &Url {
        &self.api
    }

    fn dataset_url(&self, slug: &str) -> Result<Url, SinkError> {
        let path = format!("dataset/{slug}/");
        self.api.join(&path).map_err(|e| SinkError::InvalidUrl {
            url: path,
            reason: e.to_string(),
        })
    }

    fn data_url(&self, slug: &str) -> Result<Url, SinkError> {
        let dataset = self.dataset_url(slug)?;
        dataset.join("data/").map_err(|e| SinkError::InvalidUrl {
            url: dataset.to_string(),
            reason: e.to_string(),
        })
    }

    fn authorize(&self, url: &mut Url) {
        url.query_pairs_mut()
            .append_pair("email", &self.credentials.email)
            .append_pair("api_key", &self.credentials.api_key);
    }
}

/// Turn a non-success response into [`SinkError::Status`].
fn check_status(response: Response) -> Result<Response, SinkError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    let reason = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("unknown status").to_string()
    } else {
        body.trim().to_string()
    };
    Err(SinkError::Status {
        status: status.as_u16(),
        reason,
    })
}

impl Sink for PandaSink {
    fn probe(&mut self, slug: &str) -> Result<Probe, SinkError> {
        let mut url = self.dataset_url(slug)?;
        debug!(url = %url, "probing dataset");
        self.authorize(&mut url);
        let response = self.client.get(url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Probe::NotFound);
        }
        let body = check_status(response)?.text()?;
        let info: DatasetInfo = serde_json::from_str(&body)?;
        Ok(Probe::Exists {
            row_count: info.row_count.unwrap_or(0),
        })
    }

    fn create(&mut self, descriptor: &DatasetDescriptor) -> Result<(), SinkError> {
        let mut url = self.dataset_url(&descriptor.slug)?;
        debug!(url = %url, columns = descriptor.columns.len(), "creating dataset");
        self.authorize(&mut url);
        url.query_pairs_mut()
            .append_pair("columns", &descriptor.columns.join(","));
        let response = self.client.put(url).json(descriptor).send()?;
        check_status(response)?;
        Ok(())
    }

    fn upsert_batch(&mut self, slug: &str, batch: &Batch) -> Result<(), SinkError> {
        if batch.len() > BULK_LIMIT {
            return Err(SinkError::BatchTooLarge {
                size: batch.len(),
                limit: BULK_LIMIT,
            });
        }
        let mut url = self.data_url(slug)?;
        debug!(url = %url, batch = batch.index, records = batch.len(), "sending batch");
        self.authorize(&mut url);
        let response = self.client.put(url).json(batch).send()?;
        check_status(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> PandaCredentials {
        PandaCredentials {
            email: "loader@example.org".to_string(),
            api_key: "secret".to_string(),
        }
    }

    #[test]
    fn builds_dataset_and_data_urls() {
        let sink = PandaSink::new("http://panda.example.org/", credentials()).expect("sink");
        assert_eq!(sink.api_url().as_str(), "http://panda.example.org/api/1.0/");
        assert_eq!(
            sink.dataset_url("polk-voter-registration-2025")
                .expect("url")
                .as_str(),
            "http://panda.example.org/api/1.0/dataset/polk-voter-registration-2025/"
        );
        assert_eq!(
            sink.data_url("polk-voter-registration-2025")
                .expect("url")
                .as_str(),
            "http://panda.example.org/api/1.0/dataset/polk-voter-registration-2025/data/"
        );
    }

    #[test]
    fn authorize_appends_credentials() {
        let sink = PandaSink::new("http://panda.example.org", credentials()).expect("sink");
        let mut url = sink.dataset_url("x").expect("url");
        sink.authorize(&mut url);
        assert_eq!(url.query(), Some("email=loader%40example.org&api_key=secret"));
    }

    #[test]
    fn rejects_invalid_base() {
        let err = PandaSink::new("not a url", credentials()).unwrap_err();
        assert!(matches!(err, SinkError::InvalidUrl { .. }));
    }

    #[test]
    fn debug_hides_api_key() {
        let text = format!("{:?}", credentials());
        assert!(!text.contains("secret"));
    }
}
