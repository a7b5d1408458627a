//! Data models for JobNimbus entities and search filters.

pub mod customer;
pub mod filter;

pub use customer::{CustomerSummary, JobNimbusContact, NO_ADDRESS};
pub use filter::{ContactFilter, FilterClause, SearchStrategy};
