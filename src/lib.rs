//! Scope Builder MCP Server - cleans insurance claim document text and looks up
//! customers in the JobNimbus CRM.
//!
//! # Architecture
//!
//! - **domain**: Value objects and the document text normalizer
//! - **models**: JobNimbus contacts, customer summaries and search filters
//! - **error**: Error types for the client, configuration and services
//! - **config**: Configuration loaded once from environment variables
//! - **client**: HTTP client for the JobNimbus API
//! - **repositories**: Contact lookup abstraction over the client
//! - **services**: Customer search and document cleanup
//! - **server**: MCP protocol server

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use client::JobNimbusClient;
pub use config::Config;
pub use domain::normalize_document_text;
pub use error::{ConfigError, JobNimbusApiError, ServiceError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{CustomerSummary, JobNimbusContact};
pub use server::ScopeBuilderMcpServer;
pub use services::{ContactResolver, ContactResolverImpl};
