use crate::error::{MetricGateError, Result};

use super::compile;

pub const NAMESPACE_PATTERN: &str = r"^[a-z][a-z0-9.]*[a-z0-9]\.$";
pub const DEFAULT_NAMESPACE: &str = "experimental.";

/// Resolve the namespace prefix. Unset or blank falls back to
/// [`DEFAULT_NAMESPACE`]; anything else must be dot-terminated.
pub fn resolve_namespace(raw: Option<&str>) -> Result<String> {
    let ns = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => DEFAULT_NAMESPACE,
    };

    if !compile(NAMESPACE_PATTERN)?.is_match(ns) {
        return Err(MetricGateError::Config(format!(
            "invalid namespace `{ns}`, must match: {NAMESPACE_PATTERN}"
        )));
    }
    Ok(ns.to_string())
}
