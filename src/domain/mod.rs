//! Domain value objects, validation rules, and rejection reasons.
//!
//! Validation is a leaf: it depends on nothing but the field values it inspects.

pub mod contact_id;
pub mod errors;
pub mod validation;

pub use contact_id::ContactId;
pub use errors::{ContactField, Rejection, ValidationError};
pub use validation::{check_address, check_email, check_name, check_number, first_invalid_field};
