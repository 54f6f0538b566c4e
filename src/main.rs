//! Addressbook MCP Server - Main entry point
//!
//! Connects to Elasticsearch, makes sure the contact index exists, and serves the
//! address-book tools over stdio.

use addressbook_mcp_server::client::{AsyncStoreClient, AsyncStoreClientImpl};
use addressbook_mcp_server::repositories::{ContactRepository, ElasticContactRepository};
use addressbook_mcp_server::services::{ContactService, ContactServiceImpl};
use addressbook_mcp_server::{AddressBookMcpServer, Config, StoreClient};
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting Addressbook MCP Server with store {} (index '{}')",
        config.store_url(),
        config.index_name
    );

    let sync_client = StoreClient::new(&config);
    let client = Arc::new(AsyncStoreClientImpl::new(sync_client)) as Arc<dyn AsyncStoreClient>;

    let contact_repo =
        Arc::new(ElasticContactRepository::new(client)) as Arc<dyn ContactRepository>;
    let contact_service =
        Arc::new(ContactServiceImpl::new(contact_repo)) as Arc<dyn ContactService>;

    // The index is ensured once here; operations trust it afterwards.
    if let Err(e) = contact_service.initialize().await {
        error!("Failed to initialize contact index: {}", e);
        return Err(e.into());
    }

    let server = AddressBookMcpServer::new(contact_service);

    info!("Starting MCP server with stdio transport");
    addressbook_mcp_server::server::run_server(server).await?;

    info!("Addressbook MCP Server shutdown complete");
    Ok(())
}
