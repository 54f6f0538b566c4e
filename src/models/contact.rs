//! Contact model representing one address-book entry.

use crate::domain::ContactId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The four persisted fields of a contact.
///
/// This is exactly the document body (`_source`) stored in the index. Updates
/// always replace all four fields; there is no partial form. A key left out of
/// the input reads as empty, so absent and blank fields are refused alike.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
#[serde(default)]
pub struct ContactFields {
    /// Display name, unique across the address book
    pub name: String,

    /// Digits-only phone number
    pub number: String,

    /// Postal address
    pub address: String,

    /// Email address
    pub email: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            address: address.into(),
            email: email.into(),
        }
    }

    /// True when every field carries a value.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.number.is_empty()
            && !self.address.is_empty()
            && !self.email.is_empty()
    }
}

/// A stored contact as returned by list and lookup operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Store-assigned document id
    pub id: ContactId,

    /// Relevance score reported by the store, absent for unscored queries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(flatten)]
    pub fields: ContactFields,
}

impl Contact {
    pub fn new(id: ContactId, fields: ContactFields) -> Self {
        Self {
            id,
            score: None,
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }
}
