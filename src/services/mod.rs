//! Service layer for business logic.
//!
//! Services validate tool input, call repositories and shape results for the
//! MCP handlers.

pub mod contact_resolver;
pub mod document_service;

pub use contact_resolver::{
    merge_strategy_results, ContactResolver, ContactResolverImpl, MAX_SEARCH_RESULTS,
};
pub use document_service::{clean_document, CleanedDocument};
