//! Scope Builder MCP Server - Main entry point

use anyhow::Result;
use scope_builder_mcp_server::client::{AsyncJobNimbusClient, AsyncJobNimbusClientImpl};
use scope_builder_mcp_server::repositories::{ContactRepository, JobNimbusContactRepository};
use scope_builder_mcp_server::services::{ContactResolver, ContactResolverImpl};
use scope_builder_mcp_server::{Config, JobNimbusClient, ScopeBuilderMcpServer};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can act as the fallback filter
    let config = Config::from_env();
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // stderr only: stdout carries MCP traffic
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting Scope Builder MCP Server with JobNimbus API URL: {}",
        config.jobnimbus_api_url
    );
    if let Err(e) = config.require_api_key() {
        warn!("{}; customer search will be unavailable", e);
    }

    let sync_client = JobNimbusClient::new(&config);
    let client_metrics = sync_client.metrics().clone();
    let client =
        Arc::new(AsyncJobNimbusClientImpl::new(sync_client)) as Arc<dyn AsyncJobNimbusClient>;

    let contact_repo = Arc::new(JobNimbusContactRepository::new(
        client,
        config.search_page_size,
    )) as Arc<dyn ContactRepository>;

    let resolver = ContactResolverImpl::new(contact_repo);
    let resolver_metrics = resolver.metrics().clone();
    let contact_resolver = Arc::new(resolver) as Arc<dyn ContactResolver>;

    let server = ScopeBuilderMcpServer::new(contact_resolver);

    info!("Starting MCP server with stdio transport");
    scope_builder_mcp_server::server::run_server(server).await?;

    info!("JobNimbus client metrics: {:?}", client_metrics.summary());
    info!("Customer search metrics: {:?}", resolver_metrics.summary());
    info!("Scope Builder MCP Server shutdown complete");
    Ok(())
}
