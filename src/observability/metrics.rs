//! Metrics registry for the intake service.
//!
//! Counters only, monotonic, reset on process start. Atomic operations
//! with Relaxed ordering keep increments cheap; exact cross-counter
//! consistency is not required for metrics.

use std::sync::atomic::{AtomicU64, Ordering};

/// Operational counters exposed at `/metrics`.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Total HTTP requests handled
    http_requests: AtomicU64,
    /// Listing queries executed
    queries_executed: AtomicU64,
    /// Requests rejected by validation
    requests_rejected: AtomicU64,
    /// Applications created
    applications_created: AtomicU64,
    /// Applications updated
    applications_updated: AtomicU64,
    /// Applications deleted
    applications_deleted: AtomicU64,
    /// Current application count
    applications: AtomicU64,
}

impl MetricsRegistry {
    /// Create a registry with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_http_requests(&self) {
        self.http_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_queries_executed(&self) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_requests_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_created(&self) {
        self.applications_created.fetch_add(1, Ordering::Relaxed);
        self.applications.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updated(&self) {
        self.applications_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deleted(&self) {
        self.applications_deleted.fetch_add(1, Ordering::Relaxed);
        self.applications.fetch_sub(1, Ordering::Relaxed);
    }

    /// Set the current application count (seed load).
    pub fn set_applications(&self, count: u64) {
        self.applications.store(count, Ordering::Relaxed);
    }

    /// Point-in-time snapshot of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            http_requests: self.http_requests.load(Ordering::Relaxed),
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            applications_created: self.applications_created.load(Ordering::Relaxed),
            applications_updated: self.applications_updated.load(Ordering::Relaxed),
            applications_deleted: self.applications_deleted.load(Ordering::Relaxed),
            applications: self.applications.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics, serialized at `/metrics`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MetricsSnapshot {
    pub http_requests: u64,
    pub queries_executed: u64,
    pub requests_rejected: u64,
    pub applications_created: u64,
    pub applications_updated: u64,
    pub applications_deleted: u64,
    pub applications: u64,
}
