//! Domain value objects and pure text functions.
//!
//! Value objects validate at construction time so that an empty search query
//! or contact id can never reach the CRM client.

pub mod contact_id;
pub mod document_text;
pub mod errors;
pub mod search_query;

pub use contact_id::ContactId;
pub use document_text::normalize_document_text;
pub use errors::ValidationError;
pub use search_query::SearchQuery;
