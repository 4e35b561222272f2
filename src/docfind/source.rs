//! # Doctor Source
//!
//! Where raw doctor records come from. The [`DoctorSource`] trait decouples
//! the pipeline from the network so the whole load path can be exercised
//! with an in-memory payload.
//!
//! ## Implementations
//!
//! - [`RemoteSource`]: production HTTP fetch. A single blocking GET against
//!   a fixed endpoint, no pagination, no query parameters, no retries (the
//!   absence of retry is intentional).
//! - [`StaticSource`]: a canned payload for testing.

use crate::error::{DocfindError, Result};
use serde_json::Value;

/// Abstract provider of the raw, untyped doctor payload.
///
/// Implementations return the records exactly as the source shaped them;
/// validation and normalization happen later, in `ingest`.
pub trait DoctorSource {
    /// Fetch the full raw record list.
    ///
    /// A body that is not a JSON array is a
    /// [`DocfindError::MalformedResponse`], never an empty list.
    fn fetch(&self) -> Result<Vec<Value>>;
}

/// Production source: one blocking GET of the configured endpoint.
pub struct RemoteSource {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl RemoteSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl DoctorSource for RemoteSource {
    fn fetch(&self) -> Result<Vec<Value>> {
        let response = self.client.get(&self.endpoint).send()?;
        if !response.status().is_success() {
            return Err(DocfindError::FetchStatus(response.status().as_u16()));
        }

        let body: Value = response.json()?;
        match body {
            Value::Array(records) => Ok(records),
            _ => Err(DocfindError::MalformedResponse),
        }
    }
}

/// In-memory source for tests: hands back a fixed JSON payload.
pub struct StaticSource {
    payload: Value,
}

impl StaticSource {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }
}

impl DoctorSource for StaticSource {
    fn fetch(&self) -> Result<Vec<Value>> {
        match &self.payload {
            Value::Array(records) => Ok(records.clone()),
            _ => Err(DocfindError::MalformedResponse),
        }
    }
}
