//! metricgate core: validation rules, metric kinds, error types.
//!
//! This crate defines the naming contracts and the statsd line format shared by
//! the gateway and its tests. It carries no transport or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every fallible path, pattern compilation included, surfaces as
//! `MetricGateError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod validate;

/// Error type, client codes, and the shared result alias.
pub use error::{ClientCode, MetricGateError, Result};
