//! Async wrapper around the synchronous JobNimbusClient.
//!
//! HTTP calls run on tokio's blocking thread pool via `spawn_blocking`, so
//! several search strategies can be in flight at once without stalling the
//! runtime.

use crate::client::JobNimbusClient;
use crate::error::{ApiResult, JobNimbusApiError};
use crate::models::{ContactFilter, JobNimbusContact};
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the JobNimbus client.
#[async_trait]
pub trait AsyncJobNimbusClient: Send + Sync {
    /// Whether an API key is configured.
    fn has_credential(&self) -> bool;

    async fn search_contacts(
        &self,
        filter: &ContactFilter,
        size: usize,
    ) -> ApiResult<Vec<JobNimbusContact>>;
}

#[derive(Clone)]
pub struct AsyncJobNimbusClientImpl {
    client: Arc<JobNimbusClient>,
}

impl AsyncJobNimbusClientImpl {
    pub fn new(client: JobNimbusClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncJobNimbusClient for AsyncJobNimbusClientImpl {
    fn has_credential(&self) -> bool {
        self.client.has_credential()
    }

    async fn search_contacts(
        &self,
        filter: &ContactFilter,
        size: usize,
    ) -> ApiResult<Vec<JobNimbusContact>> {
        let client = self.client.clone();
        let filter = filter.clone();

        tokio::task::spawn_blocking(move || client.search_contacts(&filter, size))
            .await
            .map_err(|e| JobNimbusApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
