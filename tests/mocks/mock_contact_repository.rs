use addressbook_mcp_server::domain::ContactId;
use addressbook_mcp_server::error::{StoreError, StoreResult};
use addressbook_mcp_server::models::{Contact, ContactFields};
use addressbook_mcp_server::repositories::ContactRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

/// Mock contact repository for testing.
///
/// In-memory stand-in for the index. Matching follows the store's analyzed
/// `match` semantics closely enough for service tests: text is split on
/// non-alphanumeric characters, lowercased, and a document matches when it
/// shares at least one token with the query. Name lookups also accept an exact,
/// case-sensitive hit, like the `name.keyword` clause. Hits come back in
/// insertion order.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    next_id: Arc<Mutex<u64>>,
    collection_exists: Arc<Mutex<bool>>,
    failing: Arc<Mutex<bool>>,
    lookup_barrier: Arc<Mutex<Option<Arc<Barrier>>>>,
    last_search: Arc<Mutex<Option<(usize, usize)>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

fn matches(field: &str, query: &str) -> bool {
    let field_tokens = tokens(field);
    tokens(query).iter().any(|t| field_tokens.contains(t))
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(0)),
            collection_exists: Arc::new(Mutex::new(false)),
            failing: Arc::new(Mutex::new(false)),
            lookup_barrier: Arc::new(Mutex::new(None)),
            last_search: Arc::new(Mutex::new(None)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Store a document directly, bypassing every service check.
    pub fn add_contact(&self, fields: ContactFields) -> ContactId {
        let id = self.allocate_id();
        self.contacts
            .lock()
            .unwrap()
            .push(Contact::new(id.clone(), fields));
        id
    }

    /// Snapshot of every stored document.
    pub fn all(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    /// Make every following store call fail as if the store were unreachable.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    /// Hold each name lookup until `parties` lookups are in flight.
    pub fn hold_lookups_until(&self, parties: usize) {
        *self.lookup_barrier.lock().unwrap() = Some(Arc::new(Barrier::new(parties)));
    }

    /// `(page_size, offset)` of the most recent search.
    pub fn last_search_window(&self) -> Option<(usize, usize)> {
        *self.last_search.lock().unwrap()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if *self.failing.lock().unwrap() {
            return Err(StoreError::HttpError("Connection failed".to_string()));
        }
        Ok(())
    }

    fn allocate_id(&self) -> ContactId {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        ContactId::new(next.to_string()).unwrap()
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn ensure_collection(&self) -> StoreResult<bool> {
        self.track_call("ensure_collection")?;

        let mut exists = self.collection_exists.lock().unwrap();
        if *exists {
            return Ok(false);
        }
        *exists = true;
        Ok(true)
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Vec<Contact>> {
        self.track_call("find_by_name")?;

        let result: Vec<Contact> = self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches(&c.fields.name, name) || c.fields.name == name)
            .take(10)
            .cloned()
            .collect();

        let barrier = self.lookup_barrier.lock().unwrap().clone();
        if let Some(barrier) = barrier {
            barrier.wait().await;
        }

        Ok(result)
    }

    async fn search(
        &self,
        query: Option<&str>,
        page_size: usize,
        offset: usize,
    ) -> StoreResult<Vec<Contact>> {
        self.track_call("search")?;
        *self.last_search.lock().unwrap() = Some((page_size, offset));

        let contacts = self.contacts.lock().unwrap();
        let result: Vec<Contact> = contacts
            .iter()
            .filter(|c| match query {
                None => true,
                Some(q) => {
                    matches(&c.fields.name, q)
                        || matches(&c.fields.number, q)
                        || matches(&c.fields.address, q)
                }
            })
            .skip(offset)
            .take(page_size)
            .cloned()
            .collect();

        Ok(result)
    }

    async fn insert(
        &self,
        id: Option<&ContactId>,
        fields: &ContactFields,
    ) -> StoreResult<ContactId> {
        self.track_call("insert")?;

        match id {
            Some(id) => {
                let mut contacts = self.contacts.lock().unwrap();
                match contacts.iter_mut().find(|c| &c.id == id) {
                    Some(existing) => existing.fields = fields.clone(),
                    None => contacts.push(Contact::new(id.clone(), fields.clone())),
                }
                Ok(id.clone())
            }
            None => Ok(self.add_contact(fields.clone())),
        }
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<()> {
        self.track_call("delete")?;

        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| &c.id != id);

        if contacts.len() == before {
            return Err(StoreError::NotFound(format!("Contact {} not found", id)));
        }
        Ok(())
    }
}
