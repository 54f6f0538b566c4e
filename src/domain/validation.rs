//! Field-level rules for contact records.
//!
//! Every check is a pure predicate. Lengths are counted in characters, not bytes.

use super::errors::ContactField;
use crate::models::ContactFields;
use validator::ValidateEmail;

/// Maximum length of a contact name.
pub const MAX_NAME_LEN: usize = 20;

/// Maximum length of a contact number.
pub const MAX_NUMBER_LEN: usize = 15;

/// Maximum length of a postal address.
pub const MAX_ADDRESS_LEN: usize = 140;

/// Maximum length of an email address.
pub const MAX_EMAIL_LEN: usize = 80;

/// True iff the name is at most 20 characters.
pub fn check_name(name: &str) -> bool {
    name.chars().count() <= MAX_NAME_LEN
}

/// True iff every character is an ASCII digit and the number is at most 15 long.
///
/// An empty number passes: no rule here requires a digit to be present.
pub fn check_number(number: &str) -> bool {
    number.chars().all(|c| c.is_ascii_digit()) && number.chars().count() <= MAX_NUMBER_LEN
}

/// True iff the address is at most 140 characters.
pub fn check_address(address: &str) -> bool {
    address.chars().count() <= MAX_ADDRESS_LEN
}

/// True iff the email is well formed and at most 80 characters.
pub fn check_email(email: &str) -> bool {
    email.validate_email() && email.chars().count() <= MAX_EMAIL_LEN
}

/// Run the four checks in name, number, address, email order and report the
/// first field that fails.
pub fn first_invalid_field(fields: &ContactFields) -> Option<ContactField> {
    ContactField::ALL.into_iter().find(|field| {
        let valid = match field {
            ContactField::Name => check_name(&fields.name),
            ContactField::Number => check_number(&fields.number),
            ContactField::Address => check_address(&fields.address),
            ContactField::Email => check_email(&fields.email),
        };
        !valid
    })
}
