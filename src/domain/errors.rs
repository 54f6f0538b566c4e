//! Domain validation errors and rejection reasons.

use std::fmt;

/// One of the four persisted contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Number,
    Address,
    Email,
}

impl ContactField {
    /// Fields in the order they are validated.
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Number, Self::Address, Self::Email];

    /// Document field name in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Number => "number",
            Self::Address => "address",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Why a mutating operation was refused.
///
/// Rejections are ordinary outcomes, reported to the caller as an
/// unacknowledged [`crate::models::Acknowledgement`] rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The name (or the rename target) is already taken.
    DuplicateName,

    /// First field that failed validation, in name, number, address, email order.
    InvalidField(ContactField),

    /// No contact matches the given name.
    NotFound,

    /// A required field was empty at the tool surface.
    MissingFields,
}

impl Rejection {
    /// Human-readable message returned to callers.
    pub fn message(&self) -> &'static str {
        match self {
            Self::DuplicateName => "Contact name already exists.",
            Self::InvalidField(ContactField::Name) => {
                "Please check if contact name conforms to the required specifications."
            }
            Self::InvalidField(ContactField::Number) => {
                "Please check if contact number conforms to the required specifications."
            }
            Self::InvalidField(ContactField::Address) => {
                "Please check if contact address conforms to the required specifications."
            }
            Self::InvalidField(ContactField::Email) => "Please check if contact email is valid.",
            Self::NotFound => "Contact does not exist.",
            Self::MissingFields => "Required fields not specified.",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
