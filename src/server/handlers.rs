//! MCP tool handlers for the address book.
//!
//! This module implements the address-book tools using the rmcp SDK's tool_router pattern.
//! Handlers are thin: they check that required fields are present, call the
//! contact service, and render its result as JSON text.

use crate::domain::Rejection;
use crate::models::{Acknowledgement, ContactFields};
use crate::services::ContactService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes address-book tools.
#[derive(Clone)]
pub struct AddressBookMcpServer {
    contact_service: Arc<dyn ContactService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for AddressBookMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "addressbook-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for an address book - create, list, search, update, and delete contacts with a name, number, address, and email.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListContactsParams {
    /// Maximum number of contacts to return (default 5000)
    #[serde(default)]
    pub page_size: Option<usize>,
    /// Number of contacts to skip (default 0)
    #[serde(default)]
    pub page: Option<usize>,
    /// Free-text query matched against name, number, and address
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ContactNameParams {
    pub name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateContactParams {
    /// Name the contact is stored under today
    pub current_name: String,
    #[serde(flatten)]
    pub fields: ContactFields,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &impl Serialize) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

#[tool_router]
impl AddressBookMcpServer {
    /// Create a new address-book MCP server.
    pub fn new(contact_service: Arc<dyn ContactService>) -> Self {
        Self {
            contact_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Store a new contact.
    #[tool(
        description = "Create a contact. Name (max 20 chars) must be unique; number is digits only (max 15); address max 140 chars; email must be valid (max 80). Returns {acknowledged, message}."
    )]
    pub async fn create_contact(
        &self,
        params: Parameters<ContactFields>,
    ) -> Result<CallToolResult, McpError> {
        let fields = params.0;

        if !fields.is_complete() {
            return json_result(&Acknowledgement::rejected(Rejection::MissingFields));
        }

        let ack = self
            .contact_service
            .insert_contact(fields)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert contact: {:?}", e);
                to_mcp_error(e)
            })?;

        json_result(&ack)
    }

    /// List contacts, optionally filtered.
    #[tool(
        description = "List contacts. Optional query matches name, number, and address. page_size limits the result count (default 5000); page skips that many results (default 0). Results never reach past the 10000th hit."
    )]
    pub async fn list_contacts(
        &self,
        params: Parameters<ListContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let contacts = self
            .contact_service
            .get_contacts(params.page_size, params.page, params.query)
            .await
            .map_err(to_mcp_error)?;

        json_result(&contacts)
    }

    /// Look up contacts by name.
    #[tool(description = "Get the contacts whose name matches the given name")]
    pub async fn get_contact(
        &self,
        params: Parameters<ContactNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let contacts = self
            .contact_service
            .get_contact(&params.0.name)
            .await
            .map_err(to_mcp_error)?;

        json_result(&contacts)
    }

    /// Replace all fields of an existing contact.
    #[tool(
        description = "Update a contact identified by current_name, replacing all four fields. Renaming to a name that already exists is refused. Returns {acknowledged, message}."
    )]
    pub async fn update_contact(
        &self,
        params: Parameters<UpdateContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        if !params.fields.is_complete() {
            return json_result(&Acknowledgement::rejected(Rejection::MissingFields));
        }

        let ack = self
            .contact_service
            .update_contact(&params.current_name, params.fields)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update contact '{}': {:?}", params.current_name, e);
                to_mcp_error(e)
            })?;

        json_result(&ack)
    }

    /// Delete a contact by name.
    #[tool(description = "Delete the contact with the given name. Returns {acknowledged, message}.")]
    pub async fn delete_contact(
        &self,
        params: Parameters<ContactNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let ack = self
            .contact_service
            .delete_contact(&params.0.name)
            .await
            .map_err(to_mcp_error)?;

        json_result(&ack)
    }
}
