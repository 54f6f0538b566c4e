//! HTTP client for the Elasticsearch index that stores contacts.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client is scoped to a single index and
//! handles URL building, refresh policy, and error mapping for the REST API.

mod async_wrapper;
pub use async_wrapper::{AsyncStoreClient, AsyncStoreClientImpl};

use crate::config::Config;
use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::metrics::{Metrics, RequestTimer};
use crate::models::{Contact, ContactFields};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Body of a `_search` response; only the hit list is read.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: SearchHits,
}

/// The `hits` envelope of a search response.
#[derive(Debug, Deserialize)]
pub struct SearchHits {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

/// One matching document.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_id")]
    pub id: ContactId,

    #[serde(rename = "_score", default)]
    pub score: Option<f64>,

    #[serde(rename = "_source")]
    pub source: ContactFields,
}

impl From<SearchHit> for Contact {
    fn from(hit: SearchHit) -> Self {
        Contact {
            id: hit.id,
            score: hit.score,
            fields: hit.source,
        }
    }
}

/// Body of an index (`_doc`) response.
#[derive(Debug, Deserialize)]
pub struct IndexResponse {
    #[serde(rename = "_id")]
    pub id: ContactId,

    #[serde(default)]
    pub result: Option<String>,
}

/// HTTP client for one Elasticsearch index.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct StoreClient {
    /// Base URL of the store, `<host>:<port>`
    base_url: String,

    /// Index holding contact documents
    index: String,

    /// Append `refresh=wait_for` to writes
    refresh_on_write: bool,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl StoreClient {
    /// Create a new StoreClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.store_url(),
            index: config.index_name.clone(),
            refresh_on_write: config.refresh_on_write,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a StoreClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, index: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            index,
            refresh_on_write: false,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Toggle `refresh=wait_for` on writes.
    pub fn with_refresh_on_write(mut self, refresh: bool) -> Self {
        self.refresh_on_write = refresh;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Name of the index this client targets.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Path inside the index, e.g. `/addressbook/_search`.
    fn index_path(&self, suffix: &str) -> String {
        format!("/{}{}", urlencoding::encode(&self.index), suffix)
    }

    /// Path of a single document by id.
    fn document_path(&self, id: &ContactId) -> String {
        let suffix = format!("/_doc/{}{}", urlencoding::encode(id.as_str()), self.refresh_param());
        self.index_path(&suffix)
    }

    fn refresh_param(&self) -> &'static str {
        if self.refresh_on_write {
            "?refresh=wait_for"
        } else {
            ""
        }
    }

    /// Execute a request, optionally with a JSON body.
    fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<ureq::Response, StoreError> {
        let timer = RequestTimer::start(&self.metrics);
        let url = self.build_url(path);

        tracing::debug!("{} {}", method, url);

        let request = self
            .agent
            .request(method, &url)
            .set("Content-Type", "application/json");

        let result = match body {
            Some(body) => request.send_json(body),
            None => request.call(),
        }
        .map_err(|e| self.map_error(e));

        if let Err(e) = &result {
            tracing::debug!("{} {} - Error: {:?}", method, url, e);
        }
        timer.finish(result.is_err());

        result
    }

    /// Map a ureq error to a StoreError.
    fn map_error(&self, error: ureq::Error) -> StoreError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    404 if message.contains("index_not_found_exception") => {
                        StoreError::IndexMissing(self.index.clone())
                    }
                    404 => StoreError::NotFound(message),
                    408 => StoreError::Timeout,
                    _ => StoreError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    StoreError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    StoreError::Timeout
                } else {
                    StoreError::HttpError(transport.to_string())
                }
            }
        }
    }

    fn read_body(response: ureq::Response) -> StoreResult<String> {
        response
            .into_string()
            .map_err(|e| StoreError::HttpError(e.to_string()))
    }

    // ========================= Index Lifecycle =========================

    /// Check whether the index exists.
    pub fn index_exists(&self) -> StoreResult<bool> {
        match self.send("HEAD", &self.index_path(""), None) {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) | Err(StoreError::IndexMissing(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Create the index with the given settings/mappings body.
    ///
    /// Returns `false` when the index already existed.
    pub fn create_index(&self, definition: &serde_json::Value) -> StoreResult<bool> {
        match self.send("PUT", &self.index_path(""), Some(definition)) {
            Ok(_) => {
                tracing::info!("Created index '{}'", self.index);
                Ok(true)
            }
            Err(StoreError::ApiError { status: 400, message })
                if message.contains("resource_already_exists_exception") =>
            {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Delete the index and every document in it. A missing index is not an error.
    pub fn delete_index(&self) -> StoreResult<()> {
        match self.send("DELETE", &self.index_path(""), None) {
            Ok(_) => {
                tracing::info!("Deleted index '{}'", self.index);
                Ok(())
            }
            Err(StoreError::NotFound(_)) | Err(StoreError::IndexMissing(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    // ========================= Document Operations =========================

    /// Run a query and return the matching contacts in store order.
    ///
    /// # Arguments
    /// * `query` - Query DSL clause placed under `"query"`
    /// * `size` - Maximum number of hits to return
    /// * `from` - Number of hits to skip
    pub fn search_contacts(
        &self,
        query: &serde_json::Value,
        size: usize,
        from: usize,
    ) -> StoreResult<Vec<Contact>> {
        let body = json!({
            "query": query,
            "size": size,
            "from": from,
        });

        let response = self.send("POST", &self.index_path("/_search"), Some(&body))?;
        let body = Self::read_body(response)?;

        let parsed: SearchResponse = serde_json::from_str(&body).map_err(StoreError::JsonError)?;
        let contacts: Vec<Contact> = parsed.hits.hits.into_iter().map(Contact::from).collect();

        self.metrics.record_contacts_returned(contacts.len());
        Ok(contacts)
    }

    /// Index a contact document.
    ///
    /// With an id the document at that id is replaced wholesale; without one the
    /// store assigns a fresh id. Returns the id the document now lives at.
    pub fn index_contact(
        &self,
        id: Option<&ContactId>,
        fields: &ContactFields,
    ) -> StoreResult<ContactId> {
        let body = serde_json::to_value(fields).map_err(StoreError::JsonError)?;

        let response = match id {
            Some(id) => self.send("PUT", &self.document_path(id), Some(&body))?,
            None => {
                let path = self.index_path(&format!("/_doc{}", self.refresh_param()));
                self.send("POST", &path, Some(&body))?
            }
        };

        let body = Self::read_body(response)?;
        let parsed: IndexResponse = serde_json::from_str(&body).map_err(StoreError::JsonError)?;

        tracing::debug!(
            "Indexed contact {} ({})",
            parsed.id,
            parsed.result.as_deref().unwrap_or("unknown")
        );
        self.metrics.record_document_written();
        Ok(parsed.id)
    }

    /// Delete a contact document by id.
    pub fn delete_contact(&self, id: &ContactId) -> StoreResult<()> {
        self.send("DELETE", &self.document_path(id), None)?;
        self.metrics.record_document_deleted();
        Ok(())
    }
}
