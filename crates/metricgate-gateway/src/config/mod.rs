//! Environment config loader (fail-fast validation).
//!
//! | Variable         | Default          |
//! |------------------|------------------|
//! | `TAGS`           | none             |
//! | `NAMESPACE`      | `experimental.`  |
//! | `LISTEN`         | `:8080`          |
//! | `WHITELIST_FILE` | unset (allow all)|
//! | `STATSD_ADDR`    | `127.0.0.1:8125` |
//! | `MAX_BODY_BYTES` | `65536`          |

pub mod schema;

use std::path::PathBuf;

use metricgate_core::error::{MetricGateError, Result};
use metricgate_core::validate::{
    parse_tags, resolve_namespace, NameValidator, TrailingChar, METRIC_NAME_TRAILING,
};

use crate::policy::Whitelist;

pub use schema::BridgeConfig;

pub fn load_from_env() -> Result<BridgeConfig> {
    load_from_vars(|key| std::env::var(key).ok())
}

pub fn load_from_vars<F>(get: F) -> Result<BridgeConfig>
where
    F: Fn(&str) -> Option<String>,
{
    load_with_policy(METRIC_NAME_TRAILING, get)
}

/// Same as [`load_from_vars`] with an explicit metric-name trailing policy.
pub fn load_with_policy<F>(name_policy: TrailingChar, get: F) -> Result<BridgeConfig>
where
    F: Fn(&str) -> Option<String>,
{
    // Blank values count as unset.
    let var = |key: &str| get(key).filter(|v| !v.trim().is_empty());

    let tags = parse_tags(&var("TAGS").unwrap_or_default())?;
    let namespace = resolve_namespace(var("NAMESPACE").as_deref())?;
    let listen = var("LISTEN").unwrap_or_else(schema::default_listen);

    let statsd_addr = match var("STATSD_ADDR") {
        Some(s) => schema::resolve_all("STATSD_ADDR", s.trim())?[0],
        None => schema::default_statsd_addr(),
    };

    let max_body_bytes = match var("MAX_BODY_BYTES") {
        Some(s) => s.trim().parse::<usize>().map_err(|e| {
            MetricGateError::Config(format!("MAX_BODY_BYTES `{s}` is not a byte count: {e}"))
        })?,
        None => schema::default_max_body_bytes(),
    };

    let whitelist_file = var("WHITELIST_FILE").map(PathBuf::from);
    let whitelist = match &whitelist_file {
        Some(path) => {
            let names = NameValidator::new(name_policy)?;
            Some(Whitelist::load_from_file(path, &names)?)
        }
        None => None,
    };

    let cfg = BridgeConfig {
        tags,
        namespace,
        listen,
        statsd_addr,
        max_body_bytes,
        name_policy,
        whitelist_file,
        whitelist,
    };
    cfg.validate()?;
    Ok(cfg)
}
