//! Lexical validation for metric names, tags, and namespaces.
//!
//! Patterns are compiled through `Result`-returning constructors at startup and
//! then shared read-only by request handlers.

pub mod name;
pub mod namespace;
pub mod tag;

pub use name::{NameValidator, TrailingChar, METRIC_NAME_TRAILING};
pub use namespace::{resolve_namespace, DEFAULT_NAMESPACE};
pub use tag::parse_tags;

use regex::Regex;

use crate::error::{MetricGateError, Result};

pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| MetricGateError::Internal(format!("bad pattern {pattern}: {e}")))
}
