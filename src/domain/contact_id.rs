//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a contact document.
///
/// Elasticsearch hands out opaque string ids (`_id`); callers must not assume any
/// ordering between them. The wrapper only guarantees the id is non-empty, on
/// construction and on deserialization alike.
///
/// # Example
///
/// ```
/// use addressbook_mcp_server::domain::ContactId;
///
/// let id = ContactId::new("oQ3kZ4kBfN1m").unwrap();
/// assert_eq!(id.as_str(), "oQ3kZ4kBfN1m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactId(String);

impl ContactId {
    /// Wrap a store id.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyId`] for an empty string.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        Self::try_from(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ContactId {
    type Error = ValidationError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl From<ContactId> for String {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
