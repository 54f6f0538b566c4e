//! Test fixtures and sample data for E2E tests.

use addressbook_mcp_server::ContactFields;

/// A valid contact whose name is unique to this run and fits the 20-char limit.
pub fn sample_contact(address: &str) -> ContactFields {
    let timestamp = chrono::Utc::now().format("%Y%m%d%H%M%S");
    ContactFields::new(
        format!("E2E{}", timestamp),
        "1234567890",
        address,
        format!("e2e{}@example.com", timestamp),
    )
}

/// A valid contact with an explicit name.
#[allow(dead_code)]
pub fn named_contact(name: &str, address: &str) -> ContactFields {
    ContactFields::new(name, "5550100", address, "e2e@example.com")
}
