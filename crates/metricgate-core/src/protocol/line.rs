//! Dogstatsd datagram formatting.
//!
//! `<namespace><name>:<value>|<type>|@<rate>|#<tag>,<tag>`
//!
//! The sample rate segment is omitted at rate 1, the tag segment when no
//! tags are configured.

use std::fmt::Write;

use super::kind::{MetricKind, MetricValue};

pub fn format_line(
    namespace: &str,
    name: &str,
    kind: MetricKind,
    value: &MetricValue,
    tags: &[String],
    rate: f64,
) -> String {
    let mut out = String::with_capacity(namespace.len() + name.len() + 32);
    out.push_str(namespace);
    out.push_str(name);
    let _ = write!(out, ":{value}|{}", kind.type_code());

    if rate < 1.0 {
        let _ = write!(out, "|@{rate}");
    }

    if !tags.is_empty() {
        out.push_str("|#");
        out.push_str(&tags.join(","));
    }
    out
}
