//! metricgate gateway library entry.
//!
//! This crate wires configuration, the whitelist policy, the emitter table,
//! and the statsd client into an HTTP service. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod obs;
pub mod ops;
pub mod policy;
pub mod router;
pub mod statsd;
