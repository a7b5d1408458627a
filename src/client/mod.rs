//! HTTP client for the JobNimbus CRM API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles bearer authentication,
//! filter encoding and error mapping for the contacts endpoint.

mod async_wrapper;
pub use async_wrapper::{AsyncJobNimbusClient, AsyncJobNimbusClientImpl};

use crate::config::Config;
use crate::error::{ApiResult, JobNimbusApiError};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{ContactFilter, JobNimbusContact};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the JobNimbus API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct JobNimbusClient {
    /// Base URL for the JobNimbus API
    base_url: String,

    /// Bearer credential; requests fail with `MissingCredential` without one
    api_key: Option<String>,

    agent: Arc<ureq::Agent>,

    metrics: Metrics,
}

impl JobNimbusClient {
    /// Create a new JobNimbusClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.jobnimbus_api_url.clone(),
            api_key: config.jobnimbus_api_key.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a JobNimbusClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Whether an API key is available.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request with bearer authentication.
    fn get(&self, path: &str) -> ApiResult<ureq::Response> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(JobNimbusApiError::MissingCredential)?;

        let url = self.build_url(path);
        let timer = HttpTimer::new(self.metrics.clone());
        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(&url)
            .set("Authorization", &format!("bearer {}", api_key))
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("GET {} - Success (status: {})", url, response.status());
                timer.complete();
            }
            Err(e) => {
                tracing::debug!("GET {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a JobNimbusApiError.
    fn map_error(&self, error: ureq::Error) -> JobNimbusApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => JobNimbusApiError::Unauthorized,
                    429 => JobNimbusApiError::RateLimitExceeded,
                    _ => JobNimbusApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    JobNimbusApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    JobNimbusApiError::Timeout
                } else {
                    JobNimbusApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Search contacts matching a filter.
    ///
    /// # Arguments
    /// * `filter` - Bool filter sent as URL-encoded JSON
    /// * `size` - Maximum number of contacts JobNimbus should return
    pub fn search_contacts(
        &self,
        filter: &ContactFilter,
        size: usize,
    ) -> ApiResult<Vec<JobNimbusContact>> {
        let filter_json = filter.to_json()?;
        let path = format!(
            "/contacts?size={}&filter={}",
            size,
            urlencoding::encode(&filter_json)
        );

        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| JobNimbusApiError::HttpError(e.to_string()))?;

        let contacts = parse_contact_list(&body)?;
        self.metrics.record_contacts_fetched(contacts.len());
        Ok(contacts)
    }
}

/// Parse a contacts payload.
///
/// JobNimbus has answered with a bare array as well as objects wrapping the
/// list in `results` or `contacts`. Any other shape is treated as no results.
/// Items that are not contact records are skipped so the rest still come back.
fn parse_contact_list(body: &str) -> ApiResult<Vec<JobNimbusContact>> {
    let value: Value = serde_json::from_str(body)?;

    let list = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results").or_else(|| map.remove("contacts")) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    let contacts = list
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<JobNimbusContact>(item) {
            Ok(contact) => Some(contact),
            Err(e) => {
                tracing::debug!("Skipping unreadable contact record: {}", e);
                None
            }
        })
        .collect();

    Ok(contacts)
}
