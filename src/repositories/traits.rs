use crate::error::ApiResult;
use crate::models::{ContactFilter, JobNimbusContact};
use async_trait::async_trait;

/// Repository for looking up CRM contacts.
///
/// Provides abstraction over the contact store, enabling different
/// implementations (API client, mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Whether the backing store has the credential it needs.
    fn is_configured(&self) -> bool;

    /// Return the contacts matching one filter.
    async fn search(&self, filter: &ContactFilter) -> ApiResult<Vec<JobNimbusContact>>;
}
