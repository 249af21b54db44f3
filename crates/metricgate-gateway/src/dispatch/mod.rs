//! Dispatcher module exports.
//!
//! Re-exports the emitter table and the ingest handler so the router and
//! tests can depend on this module directly.

pub mod emitter;
pub mod ingest;

pub use emitter::{Emitter, EmitterTable, SAMPLE_RATE};
pub use ingest::{error_response, extract_metric, ingest};
