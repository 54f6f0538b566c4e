//! End-to-end test utilities and shared configuration.
//!
//! This module provides common setup and helpers for E2E tests that talk to a
//! live Elasticsearch node. Each run works in its own throwaway index.

use addressbook_mcp_server::client::{AsyncStoreClient, AsyncStoreClientImpl, StoreClient};
use addressbook_mcp_server::repositories::{ContactRepository, ElasticContactRepository};
use addressbook_mcp_server::services::ContactServiceImpl;
use addressbook_mcp_server::Config;
use std::env;
use std::sync::Arc;

pub mod fixtures;

/// Test configuration loaded from environment variables.
pub struct TestConfig {
    pub host: String,
    pub port: u16,
}

impl TestConfig {
    /// Load configuration from .env file.
    ///
    /// Falls back to `http://localhost:9200` when nothing is set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var("ELASTICSEARCH_HOST").unwrap_or_else(|_| "http://localhost".to_string()),
            port: env::var("ELASTICSEARCH_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(9200),
        }
    }
}

/// Store client bound to a fresh index, with writes visible to the next search.
pub fn setup_test_client(index: &str) -> StoreClient {
    let test_config = TestConfig::from_env();
    let config = Config {
        elasticsearch_host: test_config.host,
        elasticsearch_port: test_config.port,
        index_name: index.to_string(),
        refresh_on_write: true,
        ..Config::default()
    };
    StoreClient::new(&config)
}

/// Contact service over the full HTTP stack.
pub fn setup_test_service(client: StoreClient) -> ContactServiceImpl {
    let client = Arc::new(AsyncStoreClientImpl::new(client)) as Arc<dyn AsyncStoreClient>;
    let repo = Arc::new(ElasticContactRepository::new(client)) as Arc<dyn ContactRepository>;
    ContactServiceImpl::new(repo)
}

/// Index name unique to this run.
pub fn unique_index_name(prefix: &str) -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%d%H%M%S%3f");
    format!("{}_{}", prefix, timestamp)
}
