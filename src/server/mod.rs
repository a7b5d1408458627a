//! MCP server for scope documents and customer lookup.

pub mod handlers;

pub use handlers::ScopeBuilderMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the server with stdio transport until the client disconnects.
pub async fn run_server(server: ScopeBuilderMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
