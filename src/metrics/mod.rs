//! Counters for JobNimbus traffic and customer searches.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared metrics collector. Clones point at the same counters.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    http_requests_total: Arc<AtomicU64>,
    http_errors_total: Arc<AtomicU64>,
    http_duration_total_ms: Arc<AtomicU64>,
    contacts_fetched_total: Arc<AtomicU64>,
    customer_searches_total: Arc<AtomicU64>,
    strategy_failures_total: Arc<AtomicU64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contacts_fetched(&self, count: usize) {
        self.contacts_fetched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record one customer search and how many of its strategies failed.
    pub fn record_customer_search(&self, failed_strategies: usize) {
        self.customer_searches_total.fetch_add(1, Ordering::Relaxed);
        self.strategy_failures_total
            .fetch_add(failed_strategies as u64, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms();
        let count = self.http_requests_total();
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn contacts_fetched_total(&self) -> u64 {
        self.contacts_fetched_total.load(Ordering::Relaxed)
    }

    pub fn customer_searches_total(&self) -> u64 {
        self.customer_searches_total.load(Ordering::Relaxed)
    }

    pub fn strategy_failures_total(&self) -> u64 {
        self.strategy_failures_total.load(Ordering::Relaxed)
    }

    /// Get a snapshot of all counters.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            contacts_fetched_total: self.contacts_fetched_total(),
            customer_searches_total: self.customer_searches_total(),
            strategy_failures_total: self.strategy_failures_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_avg_ms: f64,
    pub contacts_fetched_total: u64,
    pub customer_searches_total: u64,
    pub strategy_failures_total: u64,
}

/// Times one HTTP request and records it on completion.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    pub fn complete(self) {
        self.metrics.record_http_request(self.start.elapsed());
    }

    pub fn complete_with_error(self) {
        self.metrics.record_http_request(self.start.elapsed());
        self.metrics.record_http_error();
    }
}
