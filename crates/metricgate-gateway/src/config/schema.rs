use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use metricgate_core::error::{MetricGateError, Result};
use metricgate_core::validate::TrailingChar;

use crate::policy::Whitelist;

/// Immutable process configuration, built once before the listener binds.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Tags attached to every forwarded metric, in configured order.
    pub tags: Vec<String>,
    /// Dot-terminated prefix prepended by the statsd client.
    pub namespace: String,
    /// `host:port`, or `:port` for all interfaces.
    pub listen: String,
    pub statsd_addr: SocketAddr,
    pub max_body_bytes: usize,
    pub name_policy: TrailingChar,
    pub whitelist_file: Option<PathBuf>,
    /// `None` means every syntactically valid name is accepted.
    pub whitelist: Option<Whitelist>,
}

impl BridgeConfig {
    /// Resolve `listen` to bind candidates, tried in order.
    ///
    /// `:port` means every interface: dual-stack `[::]` first, then
    /// `0.0.0.0` for hosts without IPv6. Host names are resolved.
    pub fn listen_addrs(&self) -> Result<Vec<SocketAddr>> {
        if let Some(port) = self.listen.strip_prefix(':') {
            let port: u16 = port.parse().map_err(|e| {
                MetricGateError::Config(format!("LISTEN `{}` has a bad port: {e}", self.listen))
            })?;
            return Ok(vec![
                SocketAddr::from((Ipv6Addr::UNSPECIFIED, port)),
                SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            ]);
        }
        resolve_all("LISTEN", &self.listen)
    }

    pub fn validate(&self) -> Result<()> {
        self.listen_addrs()?;
        if self.max_body_bytes == 0 {
            return Err(MetricGateError::Config(
                "MAX_BODY_BYTES must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

pub fn default_listen() -> String {
    ":8080".into()
}
pub fn default_statsd_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8125))
}
pub fn default_max_body_bytes() -> usize {
    64 * 1024
}

/// Resolve `host:port` (or an IP literal) to every address it names.
pub fn resolve_all(var: &str, raw: &str) -> Result<Vec<SocketAddr>> {
    let addrs: Vec<SocketAddr> = raw
        .to_socket_addrs()
        .map_err(|e| MetricGateError::Config(format!("{var} `{raw}` does not resolve: {e}")))?
        .collect();
    if addrs.is_empty() {
        return Err(MetricGateError::Config(format!(
            "{var} `{raw}` resolved to no addresses"
        )));
    }
    Ok(addrs)
}
