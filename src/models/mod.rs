//! Data models for address-book entities.
//!
//! This module contains the contact record as stored in the index and the
//! acknowledgment returned by mutating operations.

pub mod acknowledgement;
pub mod contact;

pub use acknowledgement::Acknowledgement;
pub use contact::{Contact, ContactFields};
