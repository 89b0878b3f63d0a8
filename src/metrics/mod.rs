//! Basic metrics instrumentation for the contact service.
//!
//! Provides counters for form outcomes and duration tracking for delivery requests.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the service and the submission client.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Submissions run through the validator
    submissions_validated_total: Arc<AtomicU64>,

    /// Submissions that failed at least one field rule
    submissions_rejected_total: Arc<AtomicU64>,

    /// Submissions accepted by the transport
    submissions_delivered_total: Arc<AtomicU64>,

    /// Valid submissions the transport failed to deliver
    submissions_failed_total: Arc<AtomicU64>,
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
            submissions_validated_total: Arc::new(AtomicU64::new(0)),
            submissions_rejected_total: Arc::new(AtomicU64::new(0)),
            submissions_delivered_total: Arc::new(AtomicU64::new(0)),
            submissions_failed_total: Arc::new(AtomicU64::new(0)),
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

    /// Record a validation pass and whether it rejected the submission.
    pub fn record_validation(&self, is_valid: bool) {
        self.submissions_validated_total
            .fetch_add(1, Ordering::Relaxed);
        if !is_valid {
            self.submissions_rejected_total
                .fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a successful delivery.
    pub fn record_delivered(&self) {
        self.submissions_delivered_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed delivery.
    pub fn record_delivery_failed(&self) {
        self.submissions_failed_total
            .fetch_add(1, Ordering::Relaxed);
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

    pub fn submissions_validated_total(&self) -> u64 {
        self.submissions_validated_total.load(Ordering::Relaxed)
    }

    pub fn submissions_rejected_total(&self) -> u64 {
        self.submissions_rejected_total.load(Ordering::Relaxed)
    }

    pub fn submissions_delivered_total(&self) -> u64 {
        self.submissions_delivered_total.load(Ordering::Relaxed)
    }

    pub fn submissions_failed_total(&self) -> u64 {
        self.submissions_failed_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            submissions_validated_total: self.submissions_validated_total(),
            submissions_rejected_total: self.submissions_rejected_total(),
            submissions_delivered_total: self.submissions_delivered_total(),
            submissions_failed_total: self.submissions_failed_total(),
        }
    }
}

/// A snapshot of metrics values, logged as JSON when the server stops.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub submissions_validated_total: u64,
    pub submissions_rejected_total: u64,
    pub submissions_delivered_total: u64,
    pub submissions_failed_total: u64,
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
}
