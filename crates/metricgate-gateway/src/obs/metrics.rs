//! Request counters for the bridge itself.
//!
//! Labels are flattened into sorted key vectors so rendering order is
//! deterministic per series. Rendered in Prometheus text format by `/metrics`.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Current value, 0 for an unseen label set.
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let labels = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{k}=\"{}\"", escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (labels, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();
        for (labels, val) in rows {
            let _ = writeln!(out, "{name}{{{labels}}} {val}");
        }
    }
}

#[derive(Default)]
pub struct BridgeMetrics {
    /// Labels: `kind`, `outcome`.
    pub requests: CounterVec,
}

impl BridgeMetrics {
    pub fn record(&self, kind: &str, outcome: &str) {
        self.requests.inc(&[("kind", kind), ("outcome", outcome)]);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.requests.render("metricgate_requests_total", &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_order_does_not_matter() {
        let c = CounterVec::default();
        c.inc(&[("kind", "gauge"), ("outcome", "ok")]);
        c.inc(&[("outcome", "ok"), ("kind", "gauge")]);
        assert_eq!(c.get(&[("kind", "gauge"), ("outcome", "ok")]), 2);
        assert_eq!(c.get(&[("kind", "set"), ("outcome", "ok")]), 0);
    }

    #[test]
    fn renders_prometheus_text() {
        let m = BridgeMetrics::default();
        m.record("count", "ok");
        m.record("count", "parse_error");
        let text = m.render();
        assert!(text.starts_with("# TYPE metricgate_requests_total counter\n"));
        assert!(text.contains("metricgate_requests_total{kind=\"count\",outcome=\"ok\"} 1"));
        assert!(text.contains("metricgate_requests_total{kind=\"count\",outcome=\"parse_error\"} 1"));
    }
}
