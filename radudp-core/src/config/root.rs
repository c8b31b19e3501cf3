use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

use super::client::ClientConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::timeout::TimeoutConfig;

/// Top-level configuration for a `radudp` instance, following the same
/// layered shape as the teacher's `config/root.rs`: a handful of
/// sub-configs, each independently defaulted, assembled into one struct
/// that `config::loader` reads off disk.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Local addresses to accept client datagrams on.
    pub listen: Vec<SocketAddr>,
    /// Authorized peer address ranges (`find_clconf`'s backing store).
    #[serde(default)]
    pub clients: Vec<ClientConfig>,
    /// Upstream RADIUS servers (`find_srvconf`'s backing store).
    #[serde(default)]
    pub servers: Vec<ServerConfig>,
    /// Module-wide default outbound source-bind address (the original's
    /// `srcres`, resolved once at bootstrap via `udpsetsrcres`), used for
    /// any server with no `source` of its own.
    #[serde(default)]
    pub default_source: Option<IpAddr>,
    #[serde(default)]
    pub timeout: TimeoutConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
