//! MCP tool handlers for the Scope Builder server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::ServiceError;
use crate::services::{clean_document, ContactResolver};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server exposing document cleanup and JobNimbus customer search.
#[derive(Clone)]
pub struct ScopeBuilderMcpServer {
    contact_resolver: Arc<dyn ContactResolver>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ScopeBuilderMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "scope-builder-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for insurance scope documents - cleans extracted claim text and looks up JobNimbus customers to attach scope documents to.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CleanDocumentTextParams {
    /// Raw text extracted from the claim document
    text: String,
    #[serde(default)]
    filename: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchCustomersParams {
    /// Customer name or company, e.g. "John Smith"
    query: String,
}

/// Validation problems are the caller's fault; everything else is ours.
fn to_mcp_error(e: ServiceError) -> McpError {
    let code = match e {
        ServiceError::Validation(_) => ErrorCode::INVALID_PARAMS,
        ServiceError::Configuration(_) | ServiceError::Upstream(_) => ErrorCode::INTERNAL_ERROR,
    };

    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn to_internal_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

#[tool_router]
impl ScopeBuilderMcpServer {
    pub fn new(contact_resolver: Arc<dyn ContactResolver>) -> Self {
        Self {
            contact_resolver,
            tool_router: Self::tool_router(),
        }
    }

    /// Clean raw text extracted from an insurance claim document.
    #[tool(
        description = "Clean raw text extracted from an insurance claim document: drops blank lines, control characters and runs of separator junk. Returns the cleaned text."
    )]
    async fn clean_document_text(
        &self,
        params: Parameters<CleanDocumentTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let document = clean_document(&params.text, params.filename).map_err(to_mcp_error)?;
        let json_response = serde_json::to_string_pretty(&document).map_err(to_internal_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Search JobNimbus customers by name or company.
    #[tool(
        description = "Search JobNimbus customers by name or company. Tries an exact first/last name match, then a term match, then a substring match, and returns up to 10 unique customers with display name and address."
    )]
    async fn search_customers(
        &self,
        params: Parameters<SearchCustomersParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: search_customers called");
        let customers = self
            .contact_resolver
            .search(&params.query)
            .await
            .map_err(|e| {
                tracing::error!("Customer search failed: {}", e);
                to_mcp_error(e)
            })?;

        let json_response = serde_json::to_string_pretty(&customers).map_err(to_internal_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }
}
