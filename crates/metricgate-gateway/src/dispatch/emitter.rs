use std::collections::HashMap;

use metricgate_core::error::{MetricGateError, Result};
use metricgate_core::protocol::{MetricKind, MetricValue};

use crate::statsd::StatsdClient;

/// Every forwarded metric is sent unsampled.
pub const SAMPLE_RATE: f64 = 1.0;

/// Uniform parse/emit contract for one statsd operation kind.
pub trait Emitter {
    fn parse(&self, body: &[u8]) -> Result<MetricValue>;
    fn emit(
        &self,
        client: &StatsdClient,
        name: &str,
        value: &MetricValue,
        tags: &[String],
    ) -> Result<()>;
}

impl Emitter for MetricKind {
    fn parse(&self, body: &[u8]) -> Result<MetricValue> {
        MetricKind::parse(*self, body)
    }

    fn emit(
        &self,
        client: &StatsdClient,
        name: &str,
        value: &MetricValue,
        tags: &[String],
    ) -> Result<()> {
        match (self, value) {
            (MetricKind::Gauge, MetricValue::Float(v)) => client.gauge(name, *v, tags, SAMPLE_RATE),
            (MetricKind::Count, MetricValue::Int(v)) => client.count(name, *v, tags, SAMPLE_RATE),
            (MetricKind::Histogram, MetricValue::Float(v)) => {
                client.histogram(name, *v, tags, SAMPLE_RATE)
            }
            (MetricKind::Set, MetricValue::Text(v)) => client.set(name, v, tags, SAMPLE_RATE),
            (kind, value) => Err(MetricGateError::Internal(format!(
                "{kind} emitter got mismatched value {value:?}"
            ))),
        }
    }
}

/// Route segment -> emitter lookup.
#[derive(Debug, Clone)]
pub struct EmitterTable {
    by_route: HashMap<&'static str, MetricKind>,
}

impl Default for EmitterTable {
    fn default() -> Self {
        Self::new()
    }
}

impl EmitterTable {
    /// Table with all four kinds registered.
    pub fn new() -> Self {
        Self {
            by_route: MetricKind::ALL.iter().map(|k| (k.route(), *k)).collect(),
        }
    }

    pub fn lookup(&self, route: &str) -> Option<MetricKind> {
        self.by_route.get(route).copied()
    }

    pub fn routes(&self) -> Vec<&'static str> {
        let mut v: Vec<_> = self.by_route.keys().copied().collect();
        v.sort_unstable();
        v
    }
}

#[cfg(test)]
mod tests {
    use cadence::SpyMetricSink;

    use super::*;

    #[test]
    fn table_covers_all_routes() {
        let t = EmitterTable::new();
        assert_eq!(t.routes(), vec!["count", "gauge", "histogram", "set"]);
        assert_eq!(t.lookup("histogram"), Some(MetricKind::Histogram));
        assert_eq!(t.lookup("timer"), None);
        assert_eq!(t.lookup(""), None);
    }

    #[test]
    fn count_emits_integer_line() {
        let (rx, sink) = SpyMetricSink::new();
        let client = StatsdClient::from_sink("", sink);
        let kind = MetricKind::Count;

        let v = Emitter::parse(&kind, b"42").unwrap();
        kind.emit(&client, "requests.total", &v, &[]).unwrap();

        assert_eq!(rx.try_recv().unwrap(), b"requests.total:42|c".to_vec());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn mismatched_value_is_internal() {
        let (_rx, sink) = SpyMetricSink::new();
        let client = StatsdClient::from_sink("", sink);
        let err = MetricKind::Gauge
            .emit(&client, "cpu.load", &MetricValue::Int(1), &[])
            .unwrap_err();
        assert!(matches!(err, MetricGateError::Internal(_)));
    }
}
