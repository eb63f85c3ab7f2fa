//! Basic metrics instrumentation for tracking campaigns.
//!
//! Provides counters and duration tracking for vendor HTTP requests and
//! per-contact campaign outcomes.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the vendor clients and the campaign runner.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of vendor HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of vendor HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Number of campaign runs started
    campaigns_started_total: Arc<AtomicU64>,

    /// Number of calls the voice-agent API accepted
    calls_placed_total: Arc<AtomicU64>,

    /// Number of call placements that failed
    calls_failed_total: Arc<AtomicU64>,

    /// Number of contacts skipped for a missing or unusable phone
    contacts_skipped_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            campaigns_started_total: Arc::new(AtomicU64::new(0)),
            calls_placed_total: Arc::new(AtomicU64::new(0)),
            calls_failed_total: Arc::new(AtomicU64::new(0)),
            contacts_skipped_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_campaign_started(&self) {
        self.campaigns_started_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_call_placed(&self) {
        self.calls_placed_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_call_failed(&self) {
        self.calls_failed_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_skipped(&self) {
        self.contacts_skipped_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn campaigns_started_total(&self) -> u64 {
        self.campaigns_started_total.load(Ordering::Relaxed)
    }

    pub fn calls_placed_total(&self) -> u64 {
        self.calls_placed_total.load(Ordering::Relaxed)
    }

    pub fn calls_failed_total(&self) -> u64 {
        self.calls_failed_total.load(Ordering::Relaxed)
    }

    pub fn contacts_skipped_total(&self) -> u64 {
        self.contacts_skipped_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            campaigns_started_total: self.campaigns_started_total(),
            calls_placed_total: self.calls_placed_total(),
            calls_failed_total: self.calls_failed_total(),
            contacts_skipped_total: self.contacts_skipped_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub campaigns_started_total: u64,
    pub calls_placed_total: u64,
    pub calls_failed_total: u64,
    pub contacts_skipped_total: u64,
}

/// Helper for timing HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
        self.metrics.record_http_error();
    }

    /// Complete the timing, counting an error when `result` is `Err`.
    pub fn finish<T, E>(self, result: &Result<T, E>) {
        if result.is_ok() {
            self.complete();
        } else {
            self.complete_with_error();
        }
    }
}
