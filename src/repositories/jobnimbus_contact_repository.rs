use crate::client::AsyncJobNimbusClient;
use crate::error::ApiResult;
use crate::models::{ContactFilter, JobNimbusContact};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact repository backed by the JobNimbus API.
pub struct JobNimbusContactRepository {
    client: Arc<dyn AsyncJobNimbusClient>,
    page_size: usize,
}

impl JobNimbusContactRepository {
    /// Create a repository that asks for at most `page_size` contacts per filter.
    pub fn new(client: Arc<dyn AsyncJobNimbusClient>, page_size: usize) -> Self {
        Self { client, page_size }
    }
}

#[async_trait]
impl ContactRepository for JobNimbusContactRepository {
    fn is_configured(&self) -> bool {
        self.client.has_credential()
    }

    async fn search(&self, filter: &ContactFilter) -> ApiResult<Vec<JobNimbusContact>> {
        self.client.search_contacts(filter, self.page_size).await
    }
}
