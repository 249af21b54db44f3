//! Lightweight in-process counters for bridge traffic.
//!
//! Counts requests per kind and outcome. Nothing here aggregates the metrics
//! being forwarded.

pub mod metrics;

pub use metrics::BridgeMetrics;
