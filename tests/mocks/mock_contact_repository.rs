use async_trait::async_trait;
use scope_builder_mcp_server::error::{ApiResult, JobNimbusApiError};
use scope_builder_mcp_server::models::{
    ContactFilter, FilterClause, JobNimbusContact, SearchStrategy,
};
use scope_builder_mcp_server::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock contact repository for testing.
///
/// Evaluates filters in memory against its stored contacts (terms compare
/// case-insensitively, wildcards as substrings), and can be told to fail or
/// delay specific strategies. Every search is counted.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<JobNimbusContact>>>,
    configured: bool,
    failing: Arc<Mutex<Vec<SearchStrategy>>>,
    delays: Arc<Mutex<HashMap<&'static str, Duration>>>,
    call_counts: Arc<Mutex<HashMap<&'static str, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create an empty repository with a credential configured.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            configured: true,
            failing: Arc::new(Mutex::new(Vec::new())),
            delays: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository that reports no credential.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    pub fn add_contact(&self, contact: JobNimbusContact) {
        self.contacts.lock().unwrap().push(contact);
    }

    pub fn add_contacts(&self, contacts: Vec<JobNimbusContact>) {
        self.contacts.lock().unwrap().extend(contacts);
    }

    /// Make searches with this strategy's filter shape return a 500.
    pub fn fail_strategy(&self, strategy: SearchStrategy) {
        self.failing.lock().unwrap().push(strategy);
    }

    /// Delay searches with this strategy's filter shape.
    pub fn delay_strategy(&self, strategy: SearchStrategy, delay: Duration) {
        self.delays.lock().unwrap().insert(strategy.name(), delay);
    }

    /// Number of searches issued with a given strategy.
    pub fn get_call_count(&self, strategy: SearchStrategy) -> usize {
        *self.call_counts.lock().unwrap().get(strategy.name()).unwrap_or(&0)
    }

    /// Number of searches issued overall.
    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    fn track_call(&self, strategy: SearchStrategy) {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(strategy.name())
            .or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Recover which strategy produced a filter from its shape.
pub fn classify(filter: &ContactFilter) -> SearchStrategy {
    if !filter.must.is_empty() {
        SearchStrategy::Exact
    } else if filter
        .should
        .iter()
        .any(|clause| matches!(clause, FilterClause::Wildcard(_)))
    {
        SearchStrategy::Wildcard
    } else {
        SearchStrategy::Broad
    }
}

fn field<'a>(contact: &'a JobNimbusContact, name: &str) -> Option<&'a str> {
    match name {
        "first_name" => contact.first_name.as_deref(),
        "last_name" => contact.last_name.as_deref(),
        "company" => contact.company.as_deref(),
        _ => None,
    }
}

fn clause_matches(clause: &FilterClause, contact: &JobNimbusContact) -> bool {
    match clause {
        FilterClause::Term(terms) => terms.iter().all(|(name, value)| {
            field(contact, name)
                .map(|v| v.eq_ignore_ascii_case(value))
                .unwrap_or(false)
        }),
        FilterClause::Wildcard(patterns) => patterns.iter().all(|(name, pattern)| {
            let needle = pattern.trim_matches('*').to_lowercase();
            field(contact, name)
                .map(|v| v.to_lowercase().contains(&needle))
                .unwrap_or(false)
        }),
    }
}

fn filter_matches(filter: &ContactFilter, contact: &JobNimbusContact) -> bool {
    let must = filter.must.iter().all(|c| clause_matches(c, contact));
    let should_hits = filter
        .should
        .iter()
        .filter(|c| clause_matches(c, contact))
        .count();
    let should = filter.should.is_empty()
        || should_hits >= filter.minimum_should_match.unwrap_or(1) as usize;

    must && should
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn search(&self, filter: &ContactFilter) -> ApiResult<Vec<JobNimbusContact>> {
        let strategy = classify(filter);
        self.track_call(strategy);

        let delay = self.delays.lock().unwrap().get(strategy.name()).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.lock().unwrap().contains(&strategy) {
            return Err(JobNimbusApiError::ApiError {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts
            .iter()
            .filter(|contact| filter_matches(filter, contact))
            .cloned()
            .collect())
    }
}
