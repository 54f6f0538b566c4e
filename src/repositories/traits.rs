use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactFields};
use async_trait::async_trait;

/// Repository for contact documents.
///
/// Translates address-book operations into document-store operations against a
/// single collection. Implementations decide how matching is evaluated; callers
/// rely only on "zero or more hits, in the store's own order".
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Create the collection if it does not exist yet. Idempotent.
    ///
    /// Returns `true` when this call created it.
    async fn ensure_collection(&self) -> StoreResult<bool>;

    /// Full-text match against the `name` field only.
    async fn find_by_name(&self, name: &str) -> StoreResult<Vec<Contact>>;

    /// Match-all when `query` is `None`, otherwise a match across name, number,
    /// and address. Skips `offset` hits and returns at most `page_size`.
    async fn search(
        &self,
        query: Option<&str>,
        page_size: usize,
        offset: usize,
    ) -> StoreResult<Vec<Contact>>;

    /// Write a document. `Some(id)` overwrites that document in place; `None`
    /// lets the store assign a new id.
    async fn insert(&self, id: Option<&ContactId>, fields: &ContactFields)
        -> StoreResult<ContactId>;

    /// Remove a document by id.
    async fn delete(&self, id: &ContactId) -> StoreResult<()>;
}
