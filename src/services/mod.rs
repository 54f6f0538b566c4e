//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! validation and the repositories. They provide a clean boundary between the
//! MCP handlers and the data access layer.

mod contact_service;

pub use contact_service::{
    ContactService, ContactServiceImpl, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_RESULT_WINDOW,
};

// Re-export common types used by services
pub use crate::models::{Acknowledgement, Contact, ContactFields};
