//! Shared error type across metricgate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Missing or malformed metric name.
    BadRequest,
    /// Metric name not present in the whitelist.
    NotWhitelisted,
    /// Request body could not be read.
    BodyRead,
    /// Request body did not parse as the metric's value type.
    Parse,
    /// Statsd sink rejected the datagram.
    Transport,
    /// Startup configuration rejected.
    Config,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and counters.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotWhitelisted => "NOT_WHITELISTED",
            ClientCode::BodyRead => "BODY_READ",
            ClientCode::Parse => "PARSE",
            ClientCode::Transport => "TRANSPORT",
            ClientCode::Config => "CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricGateError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum MetricGateError {
    #[error("no metric provided")]
    NoMetric,
    #[error("invalid metric name: {0}")]
    InvalidMetricName(String),
    #[error("metric is not whitelisted: {0}")]
    NotWhitelisted(String),
    #[error("could not read body: {0}")]
    BodyRead(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("statsd send failed: {0}")]
    Transport(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricGateError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MetricGateError::NoMetric | MetricGateError::InvalidMetricName(_) => {
                ClientCode::BadRequest
            }
            MetricGateError::NotWhitelisted(_) => ClientCode::NotWhitelisted,
            MetricGateError::BodyRead(_) => ClientCode::BodyRead,
            MetricGateError::Parse(_) => ClientCode::Parse,
            MetricGateError::Transport(_) => ClientCode::Transport,
            MetricGateError::Config(_) => ClientCode::Config,
            MetricGateError::Internal(_) => ClientCode::Internal,
        }
    }
}
