//! The data provider seam.
//!
//! A provider is handed to the directory when it is created; nothing reads
//! fetched data from process-wide state. Closures returning a payload are
//! providers too.

use std::path::PathBuf;
use std::time::Instant;

use serde_json::Value;
use tracing::{info, info_span};

use matrix_model::RecordStore;

use crate::error::{FetchError, IngestError};
use crate::payload::RawPayload;
use crate::tabular::FieldMapping;

/// Source of organization data, invoked once per load.
pub trait DataProvider {
    fn fetch_organizations(&self) -> Result<RawPayload, FetchError>;
}

impl<F> DataProvider for F
where
    F: Fn() -> Result<RawPayload, FetchError>,
{
    fn fetch_organizations(&self) -> Result<RawPayload, FetchError> {
        self()
    }
}

/// Reads a saved provider response from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
    fields: FieldMapping,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fields: FieldMapping::default(),
        }
    }

    #[must_use]
    pub fn with_fields(mut self, fields: FieldMapping) -> Self {
        self.fields = fields;
        self
    }

    fn read(&self) -> Result<Value, IngestError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| IngestError::io(&self.path, e))?;
        serde_json::from_str(&content).map_err(|source| IngestError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

impl DataProvider for JsonFileProvider {
    fn fetch_organizations(&self) -> Result<RawPayload, FetchError> {
        let value = self.read()?;
        RawPayload::from_json(&value, &self.fields)
    }
}

/// Serves a fixed, already-decoded response.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    response: Result<Value, FetchError>,
    fields: FieldMapping,
}

impl StaticProvider {
    pub fn new(response: Value) -> Self {
        Self {
            response: Ok(response),
            fields: FieldMapping::default(),
        }
    }

    /// A provider whose every fetch fails with `error`.
    pub fn failing(error: FetchError) -> Self {
        Self {
            response: Err(error),
            fields: FieldMapping::default(),
        }
    }
}

impl DataProvider for StaticProvider {
    fn fetch_organizations(&self) -> Result<RawPayload, FetchError> {
        let value = self.response.as_ref().map_err(Clone::clone)?;
        RawPayload::from_json(value, &self.fields)
    }
}

/// Fetch once and normalize into a record store.
///
/// Either the whole dataset is returned or an error; nothing partial.
pub fn load_store(provider: &dyn DataProvider) -> Result<RecordStore, FetchError> {
    let span = info_span!("load_store");
    let _guard = span.enter();
    let start = Instant::now();
    let store = provider.fetch_organizations()?.into_store();
    info!(
        categories = store.category_count(),
        records = store.record_count(),
        duration_ms = start.elapsed().as_millis(),
        "organization data loaded"
    );
    Ok(store)
}
