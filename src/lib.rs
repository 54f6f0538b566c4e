//! Addressbook MCP Server - an Elasticsearch-backed address book exposed over the
//! Model Context Protocol.
//!
//! Contacts carry a name, number, address, and email. Names are unique, fields
//! are validated before anything is written, and listings support paging and a
//! free-text query across name, number, and address.
//!
//! # Architecture
//!
//! - **domain**: Contact ids, field validation, rejection reasons
//! - **models**: Contact records and the `{acknowledged, message}` result
//! - **error**: Store and configuration error types
//! - **config**: Configuration management from environment variables
//! - **client**: Blocking HTTP client for the index, plus its async wrapper
//! - **repositories**: Contact store adapter (query construction, index lifecycle)
//! - **services**: Uniqueness and validation gating around the repository
//! - **server**: MCP tool surface
//! - **metrics**: Store round-trip counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use client::StoreClient;
pub use config::Config;
pub use error::{ConfigError, StoreError, StoreResult};
pub use metrics::{Metrics, MetricsSummary, RequestTimer};
pub use models::{Acknowledgement, Contact, ContactFields};
pub use server::AddressBookMcpServer;
