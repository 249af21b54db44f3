//! Policy layer (metric name whitelist).
//!
//! The whitelist is loaded at startup and consulted read-only by the
//! dispatcher after a name has passed lexical validation.

pub mod whitelist;

pub use whitelist::{is_allowed, Whitelist};
