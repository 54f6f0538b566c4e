//! Async wrapper around the synchronous StoreClient.
//!
//! This module provides an async interface to the synchronous StoreClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::StoreClient;
use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactFields};
use async_trait::async_trait;
use std::sync::Arc;

/// Async wrapper trait for document store operations.
///
/// This trait provides async versions of the StoreClient methods,
/// internally using `tokio::task::spawn_blocking` to avoid
/// blocking the async runtime with synchronous HTTP calls.
#[async_trait]
pub trait AsyncStoreClient: Send + Sync {
    async fn index_exists(&self) -> StoreResult<bool>;
    async fn create_index(&self, definition: &serde_json::Value) -> StoreResult<bool>;
    async fn delete_index(&self) -> StoreResult<()>;

    async fn search_contacts(
        &self,
        query: &serde_json::Value,
        size: usize,
        from: usize,
    ) -> StoreResult<Vec<Contact>>;
    async fn index_contact(
        &self,
        id: Option<&ContactId>,
        fields: &ContactFields,
    ) -> StoreResult<ContactId>;
    async fn delete_contact(&self, id: &ContactId) -> StoreResult<()>;
}

/// Async wrapper around synchronous StoreClient.
#[derive(Clone)]
pub struct AsyncStoreClientImpl {
    client: Arc<StoreClient>,
}

impl AsyncStoreClientImpl {
    pub fn new(client: StoreClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped blocking client.
    pub fn inner(&self) -> &StoreClient {
        &self.client
    }
}

fn join_error(e: tokio::task::JoinError) -> StoreError {
    StoreError::HttpError(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncStoreClient for AsyncStoreClientImpl {
    async fn index_exists(&self) -> StoreResult<bool> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.index_exists())
            .await
            .map_err(join_error)?
    }

    async fn create_index(&self, definition: &serde_json::Value) -> StoreResult<bool> {
        let client = self.client.clone();
        let definition = definition.clone();

        tokio::task::spawn_blocking(move || client.create_index(&definition))
            .await
            .map_err(join_error)?
    }

    async fn delete_index(&self) -> StoreResult<()> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.delete_index())
            .await
            .map_err(join_error)?
    }

    async fn search_contacts(
        &self,
        query: &serde_json::Value,
        size: usize,
        from: usize,
    ) -> StoreResult<Vec<Contact>> {
        let client = self.client.clone();
        let query = query.clone();

        tokio::task::spawn_blocking(move || client.search_contacts(&query, size, from))
            .await
            .map_err(join_error)?
    }

    async fn index_contact(
        &self,
        id: Option<&ContactId>,
        fields: &ContactFields,
    ) -> StoreResult<ContactId> {
        let client = self.client.clone();
        let id = id.cloned();
        let fields = fields.clone();

        tokio::task::spawn_blocking(move || client.index_contact(id.as_ref(), &fields))
            .await
            .map_err(join_error)?
    }

    async fn delete_contact(&self, id: &ContactId) -> StoreResult<()> {
        let client = self.client.clone();
        let id = id.clone();

        tokio::task::spawn_blocking(move || client.delete_contact(&id))
            .await
            .map_err(join_error)?
    }
}
