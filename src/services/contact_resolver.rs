//! Customer lookup against the CRM.
//!
//! One search runs every applicable [`SearchStrategy`] concurrently, keeps
//! each strategy's outcome separately, and merges them in strategy order so
//! that an exact name match always outranks a broad or wildcard hit for the
//! same contact.

use crate::domain::SearchQuery;
use crate::error::{ApiResult, ServiceError, ServiceResult};
use crate::metrics::Metrics;
use crate::models::{CustomerSummary, JobNimbusContact, SearchStrategy};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// Maximum number of customers returned by one search.
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Customer search service.
#[async_trait]
pub trait ContactResolver: Send + Sync {
    /// Search customers by free text.
    ///
    /// # Errors
    /// - `ServiceError::Validation` if the query is empty or whitespace-only
    /// - `ServiceError::Configuration` if no CRM credential is configured
    ///
    /// Both are raised before any request is sent. Failed strategies are
    /// skipped, so a search where every strategy fails returns an empty list.
    async fn search(&self, query: &str) -> ServiceResult<Vec<CustomerSummary>>;
}

/// Default implementation of ContactResolver.
pub struct ContactResolverImpl {
    contact_repo: Arc<dyn ContactRepository>,
    metrics: Metrics,
}

impl ContactResolverImpl {
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self {
            contact_repo,
            metrics: Metrics::new(),
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

#[async_trait]
impl ContactResolver for ContactResolverImpl {
    async fn search(&self, query: &str) -> ServiceResult<Vec<CustomerSummary>> {
        let query = SearchQuery::parse(query)?;

        if !self.contact_repo.is_configured() {
            return Err(ServiceError::Configuration(
                "JobNimbus API key not configured".to_string(),
            ));
        }

        let start = Instant::now();
        let plan = SearchStrategy::plan(&query);

        let outcomes = join_all(plan.iter().map(|(strategy, filter)| async move {
            tracing::debug!(strategy = strategy.name(), "Searching JobNimbus contacts");
            (*strategy, self.contact_repo.search(filter).await)
        }))
        .await;

        let (results, failed) = merge_strategy_results(outcomes);
        self.metrics.record_customer_search(failed);

        tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            result_count = results.len(),
            failed_strategies = failed,
            "Customer search completed"
        );

        Ok(results)
    }
}

/// Merge per-strategy outcomes, in the order given.
///
/// The first occurrence of each contact id wins and the merged list is cut to
/// [`MAX_SEARCH_RESULTS`]. Failed strategies are logged and counted; the
/// count is returned alongside the results.
pub fn merge_strategy_results(
    outcomes: Vec<(SearchStrategy, ApiResult<Vec<JobNimbusContact>>)>,
) -> (Vec<CustomerSummary>, usize) {
    let mut seen = HashSet::new();
    let mut results = Vec::new();
    let mut failed = 0;

    for (strategy, outcome) in outcomes {
        let contacts = match outcome {
            Ok(contacts) => contacts,
            Err(e) => {
                failed += 1;
                tracing::warn!(strategy = strategy.name(), error = %e, "Search strategy failed, skipping");
                continue;
            }
        };

        tracing::debug!(
            strategy = strategy.name(),
            count = contacts.len(),
            "Search strategy returned contacts"
        );

        for contact in &contacts {
            match CustomerSummary::from_contact(contact) {
                Some(summary) => {
                    if seen.insert(summary.id.clone()) {
                        results.push(summary);
                    }
                }
                None => tracing::debug!("Skipping contact without jnid or recid"),
            }
        }
    }

    results.truncate(MAX_SEARCH_RESULTS);
    (results, failed)
}
