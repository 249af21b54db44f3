//! Shared application state for the metricgate gateway.
//!
//! Everything here is built once at startup and read-only afterwards, so
//! request handlers share it through a cheap `Arc` clone.

use std::sync::Arc;

use metricgate_core::error::Result;
use metricgate_core::validate::NameValidator;

use crate::config::BridgeConfig;
use crate::dispatch::EmitterTable;
use crate::obs::BridgeMetrics;
use crate::policy::Whitelist;
use crate::statsd::StatsdClient;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: BridgeConfig,
    names: NameValidator,
    client: StatsdClient,
    emitters: EmitterTable,
    metrics: BridgeMetrics,
}

impl AppState {
    /// Build state with a UDP client for `cfg.statsd_addr`.
    pub fn new(cfg: BridgeConfig) -> Result<Self> {
        let client = StatsdClient::udp(cfg.statsd_addr, &cfg.namespace)?;
        Self::with_client(cfg, client)
    }

    pub fn with_client(cfg: BridgeConfig, client: StatsdClient) -> Result<Self> {
        let names = NameValidator::new(cfg.name_policy)?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                names,
                client,
                emitters: EmitterTable::new(),
                metrics: BridgeMetrics::default(),
            }),
        })
    }

    pub fn cfg(&self) -> &BridgeConfig {
        &self.inner.cfg
    }

    pub fn names(&self) -> &NameValidator {
        &self.inner.names
    }

    pub fn whitelist(&self) -> Option<&Whitelist> {
        self.inner.cfg.whitelist.as_ref()
    }

    pub fn tags(&self) -> &[String] {
        &self.inner.cfg.tags
    }

    pub fn client(&self) -> &StatsdClient {
        &self.inner.client
    }

    pub fn emitters(&self) -> &EmitterTable {
        &self.inner.emitters
    }

    pub fn metrics(&self) -> &BridgeMetrics {
        &self.inner.metrics
    }
}
