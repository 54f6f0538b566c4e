use crate::client::AsyncStoreClient;
use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactFields};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

/// Fields searched by a free-text query. Email is not searched.
pub const SEARCH_FIELDS: [&str; 3] = ["name", "number", "address"];

/// Hits returned by a name lookup; the store's default page size.
const NAME_LOOKUP_SIZE: usize = 10;

/// Settings and mappings used when the index is created.
///
/// Text fields keep a `keyword` sub-field for exact matching; email is stored
/// as a keyword only.
pub fn contact_index_definition() -> Value {
    let text_with_keyword = json!({
        "type": "text",
        "fields": { "keyword": { "type": "keyword" } }
    });

    json!({
        "mappings": {
            "properties": {
                "name": text_with_keyword,
                "number": text_with_keyword,
                "address": text_with_keyword,
                "email": { "type": "keyword" }
            }
        }
    })
}

/// Name lookup: an analyzed `match` on `name`, or an exact `term` on
/// `name.keyword`.
///
/// Names that analyze to no tokens at all (`"!!!"`, `"--"`) still find
/// themselves through the keyword clause.
pub fn match_name_query(name: &str) -> Value {
    json!({
        "bool": {
            "should": [
                { "match": { "name": name } },
                { "term": { "name.keyword": name } }
            ],
            "minimum_should_match": 1
        }
    })
}

/// `multi_match` clause across [`SEARCH_FIELDS`].
pub fn multi_field_query(query: &str) -> Value {
    json!({
        "multi_match": {
            "query": query,
            "fields": SEARCH_FIELDS,
        }
    })
}

/// `match_all` clause.
pub fn match_all_query() -> Value {
    json!({ "match_all": {} })
}

/// Contact repository backed by an Elasticsearch index.
///
/// Query DSL is built here; the client only ships it over the wire.
pub struct ElasticContactRepository {
    client: Arc<dyn AsyncStoreClient>,
}

impl ElasticContactRepository {
    /// Create a new ElasticContactRepository with the given client.
    pub fn new(client: Arc<dyn AsyncStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactRepository for ElasticContactRepository {
    async fn ensure_collection(&self) -> StoreResult<bool> {
        if self.client.index_exists().await? {
            return Ok(false);
        }
        self.client.create_index(&contact_index_definition()).await
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Vec<Contact>> {
        self.client
            .search_contacts(&match_name_query(name), NAME_LOOKUP_SIZE, 0)
            .await
    }

    async fn search(
        &self,
        query: Option<&str>,
        page_size: usize,
        offset: usize,
    ) -> StoreResult<Vec<Contact>> {
        let clause = match query {
            Some(q) => multi_field_query(q),
            None => match_all_query(),
        };
        self.client.search_contacts(&clause, page_size, offset).await
    }

    async fn insert(
        &self,
        id: Option<&ContactId>,
        fields: &ContactFields,
    ) -> StoreResult<ContactId> {
        self.client.index_contact(id, fields).await
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<()> {
        self.client.delete_contact(id).await
    }
}
