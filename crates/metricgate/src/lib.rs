//! HTTP -> statsd bridge, single-dependency entry point.
//!
//! `core` holds validation and the metric model, `gateway` the axum service.
//! Embedders that build their own router usually only need the prelude.

pub mod core {
    pub use metricgate_core::*;
}

pub mod gateway {
    pub use metricgate_gateway::*;
}

pub mod prelude {
    pub use metricgate_core::protocol::{MetricKind, MetricValue};
    pub use metricgate_core::validate::{NameValidator, TrailingChar, METRIC_NAME_TRAILING};
    pub use metricgate_core::{MetricGateError, Result};
    pub use metricgate_gateway::app_state::AppState;
    pub use metricgate_gateway::config::BridgeConfig;
    pub use metricgate_gateway::router::build_router;
    pub use metricgate_gateway::statsd::StatsdClient;
}
