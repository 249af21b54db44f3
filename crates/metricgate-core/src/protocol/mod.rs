//! Metric kinds and the dogstatsd wire line.
//!
//! - `kind`: route segment -> kind, and body parsing per kind
//! - `line`: datagram text sent to the agent

pub mod kind;
pub mod line;

pub use kind::{MetricKind, MetricValue};
pub use line::format_line;
