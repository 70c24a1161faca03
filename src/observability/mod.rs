//! Observability: operational counters exposed at `/metrics`.
//!
//! Request and error logging go through `tracing`; this module only holds
//! the metrics registry.

mod metrics;

pub use metrics::{MetricsRegistry, MetricsSnapshot};
