//! Contact service layer.
//!
//! Business logic for inserting, listing, looking up, updating, and deleting
//! contacts. Uniqueness and field validation are enforced here; the repository
//! only stores what it is given.
//!
//! Uniqueness is check-then-act: two concurrent inserts of the same name can
//! both pass the existence check before either write lands. The store offers no
//! unique constraint on `name`, so that race is accepted.

use crate::domain::{first_invalid_field, Rejection};
use crate::error::{StoreError, StoreResult};
use crate::models::{Acknowledgement, Contact, ContactFields};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Page size used when the caller does not give one.
pub const DEFAULT_PAGE_SIZE: usize = 5000;

/// Offset used when the caller does not give one.
pub const DEFAULT_PAGE: usize = 0;

/// Deepest hit a search may reach (`from + size`), the store's default
/// `index.max_result_window`.
pub const MAX_RESULT_WINDOW: usize = 10_000;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Make sure the backing collection exists. Runs once; later calls are no-ops.
    async fn initialize(&self) -> StoreResult<()>;

    /// Insert a new contact after the uniqueness and field checks pass.
    async fn insert_contact(&self, fields: ContactFields) -> StoreResult<Acknowledgement>;

    /// List contacts, optionally filtered by a free-text query.
    ///
    /// `page` is the number of hits to skip, not a page index. The window is
    /// clamped so `page + page_size` never exceeds [`MAX_RESULT_WINDOW`]; an
    /// offset at or past it yields an empty list.
    async fn get_contacts(
        &self,
        page_size: Option<usize>,
        page: Option<usize>,
        query: Option<String>,
    ) -> StoreResult<Vec<Contact>>;

    /// Contacts whose name matches. Usually zero or one.
    async fn get_contact(&self, name: &str) -> StoreResult<Vec<Contact>>;

    /// Replace all four fields of the contact currently called `current_name`.
    async fn update_contact(
        &self,
        current_name: &str,
        fields: ContactFields,
    ) -> StoreResult<Acknowledgement>;

    /// Delete the contact called `name`.
    async fn delete_contact(&self, name: &str) -> StoreResult<Acknowledgement>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repo: Arc<dyn ContactRepository>,
    ready: OnceCell<()>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self {
            repo,
            ready: OnceCell::new(),
        }
    }

    /// Ensure the collection exactly once per service lifetime.
    ///
    /// After the first success the store is trusted; a collection that vanishes
    /// later surfaces as [`StoreError::IndexMissing`] from the next operation.
    async fn ready(&self) -> StoreResult<()> {
        self.ready
            .get_or_try_init(|| async {
                if self.repo.ensure_collection().await? {
                    tracing::info!("Contact collection created");
                } else {
                    tracing::debug!("Contact collection already present");
                }
                Ok::<(), StoreError>(())
            })
            .await?;
        Ok(())
    }

    async fn name_taken(&self, name: &str) -> StoreResult<bool> {
        Ok(!self.repo.find_by_name(name).await?.is_empty())
    }

    /// A new name is a rename only when it differs ignoring case.
    fn is_rename(current_name: &str, new_name: &str) -> bool {
        current_name.to_lowercase() != new_name.to_lowercase()
    }

    fn reject(operation: &str, name: &str, reason: Rejection) -> Acknowledgement {
        tracing::debug!("{} rejected for '{}': {:?}", operation, name, reason);
        Acknowledgement::rejected(reason)
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn initialize(&self) -> StoreResult<()> {
        self.ready().await
    }

    async fn insert_contact(&self, fields: ContactFields) -> StoreResult<Acknowledgement> {
        self.ready().await?;

        if self.name_taken(&fields.name).await? {
            return Ok(Self::reject("insert", &fields.name, Rejection::DuplicateName));
        }

        if let Some(field) = first_invalid_field(&fields) {
            return Ok(Self::reject("insert", &fields.name, Rejection::InvalidField(field)));
        }

        let id = self.repo.insert(None, &fields).await?;
        tracing::info!("Inserted contact '{}' as {}", fields.name, id);

        Ok(Acknowledgement::accepted())
    }

    async fn get_contacts(
        &self,
        page_size: Option<usize>,
        page: Option<usize>,
        query: Option<String>,
    ) -> StoreResult<Vec<Contact>> {
        self.ready().await?;

        let offset = page.unwrap_or(DEFAULT_PAGE);
        let page_size = page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_RESULT_WINDOW.saturating_sub(offset));

        if page_size == 0 {
            return Ok(Vec::new());
        }

        self.repo.search(query.as_deref(), page_size, offset).await
    }

    async fn get_contact(&self, name: &str) -> StoreResult<Vec<Contact>> {
        self.ready().await?;
        self.repo.find_by_name(name).await
    }

    async fn update_contact(
        &self,
        current_name: &str,
        fields: ContactFields,
    ) -> StoreResult<Acknowledgement> {
        self.ready().await?;

        // First match wins when the store holds several.
        let Some(target) = self.repo.find_by_name(current_name).await?.into_iter().next() else {
            return Ok(Self::reject("update", current_name, Rejection::NotFound));
        };

        if Self::is_rename(current_name, &fields.name) && self.name_taken(&fields.name).await? {
            return Ok(Self::reject("update", current_name, Rejection::DuplicateName));
        }

        if let Some(field) = first_invalid_field(&fields) {
            return Ok(Self::reject("update", current_name, Rejection::InvalidField(field)));
        }

        self.repo.insert(Some(&target.id), &fields).await?;
        tracing::info!(
            "Updated contact {} ('{}' -> '{}')",
            target.id,
            current_name,
            fields.name
        );

        Ok(Acknowledgement::accepted())
    }

    async fn delete_contact(&self, name: &str) -> StoreResult<Acknowledgement> {
        self.ready().await?;

        let Some(target) = self.repo.find_by_name(name).await?.into_iter().next() else {
            return Ok(Self::reject("delete", name, Rejection::NotFound));
        };

        self.repo.delete(&target.id).await?;
        tracing::info!("Deleted contact '{}' ({})", name, target.id);

        Ok(Acknowledgement::accepted())
    }
}
