use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

/// An upstream RADIUS server this transport can proxy requests to,
/// analogous to what `find_srvconf` would look up when identifying the
/// origin of an upstream reply.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub name: String,
    /// Destination address and port.
    pub address: SocketAddr,
    /// Desired local source-bind address for outbound sockets to this
    /// server, e.g. "192.0.2.1". Resolved via `lookup_host` at bootstrap
    /// time (spec.md §4.H); when absent, the module-wide default source
    /// (`srcres`) is used instead.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub retry_count: Option<u32>,
    #[serde(default)]
    pub retry_interval_secs: Option<u64>,
}

impl ServerConfig {
    pub fn retry_interval(&self) -> Option<Duration> {
        self.retry_interval_secs.map(Duration::from_secs)
    }
}
