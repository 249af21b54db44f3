//! Statsd client over a cadence `MetricSink`.
//!
//! Lines are formatted by `metricgate_core::protocol::format_line` and handed
//! to the sink as-is, which lets set values be free-form strings (minus the
//! datagram separators). Production uses a non-blocking UDP sink; sends are
//! fire-and-forget and never retried.

use std::fmt;
use std::net::{SocketAddr, UdpSocket};
use std::sync::Arc;

use cadence::{MetricSink, UdpMetricSink};

use metricgate_core::error::{MetricGateError, Result};
use metricgate_core::protocol::{format_line, MetricKind, MetricValue};

#[derive(Clone)]
pub struct StatsdClient {
    namespace: String,
    sink: Arc<dyn MetricSink + Send + Sync>,
}

impl fmt::Debug for StatsdClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatsdClient")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl StatsdClient {
    pub fn from_sink<T>(namespace: &str, sink: T) -> Self
    where
        T: MetricSink + Send + Sync + 'static,
    {
        Self {
            namespace: namespace.to_string(),
            sink: Arc::new(sink),
        }
    }

    /// Non-blocking UDP client for the agent at `agent`.
    pub fn udp(agent: SocketAddr, namespace: &str) -> Result<Self> {
        let local = if agent.is_ipv6() { "[::]:0" } else { "0.0.0.0:0" };
        let socket = UdpSocket::bind(local)
            .map_err(|e| MetricGateError::Config(format!("statsd socket bind failed: {e}")))?;
        socket
            .set_nonblocking(true)
            .map_err(|e| MetricGateError::Config(format!("statsd socket setup failed: {e}")))?;
        let sink = UdpMetricSink::from(agent, socket)
            .map_err(|e| MetricGateError::Config(format!("statsd sink ({agent}): {e}")))?;
        Ok(Self::from_sink(namespace, sink))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn gauge(&self, name: &str, value: f64, tags: &[String], rate: f64) -> Result<()> {
        self.send(name, MetricKind::Gauge, &MetricValue::Float(value), tags, rate)
    }

    pub fn count(&self, name: &str, value: i64, tags: &[String], rate: f64) -> Result<()> {
        self.send(name, MetricKind::Count, &MetricValue::Int(value), tags, rate)
    }

    pub fn histogram(&self, name: &str, value: f64, tags: &[String], rate: f64) -> Result<()> {
        self.send(name, MetricKind::Histogram, &MetricValue::Float(value), tags, rate)
    }

    /// Set values are free text; `|` and line breaks would split the datagram.
    pub fn set(&self, name: &str, value: &str, tags: &[String], rate: f64) -> Result<()> {
        if value.contains(|c: char| matches!(c, '|' | '\n' | '\r')) {
            return Err(MetricGateError::Transport(format!(
                "set value for {name} contains a line break or '|'"
            )));
        }
        self.send(name, MetricKind::Set, &MetricValue::Text(value.to_string()), tags, rate)
    }

    fn send(
        &self,
        name: &str,
        kind: MetricKind,
        value: &MetricValue,
        tags: &[String],
        rate: f64,
    ) -> Result<()> {
        let line = format_line(&self.namespace, name, kind, value, tags, rate);
        self.sink
            .emit(&line)
            .map(|_| ())
            .map_err(|e| MetricGateError::Transport(e.to_string()))
    }
}
