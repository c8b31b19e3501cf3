use ipnet::IpNet;
use serde::Deserialize;

/// An authorized client address range, analogous to what `find_clconf`
/// would look up in the real proxy's configuration store. CIDR matching
/// (rather than exact-address only) is grounded on `security/ip_filter.rs`'s
/// existing `IpNet`-based allowlist — the distilled spec treats `find_clconf`
/// as an opaque external collaborator, but since this core now owns the
/// backing store it needs *some* matching rule, and CIDR is the natural one.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Human-readable label for logging, not used for matching.
    pub name: String,
    /// Address range this entry authorizes, e.g. "10.0.0.0/24" or a /32.
    pub network: IpNet,
    /// Per-client override of the idle-expiry window; falls back to
    /// `TimeoutConfig::client_idle_secs` when absent.
    #[serde(default)]
    pub idle_secs: Option<u64>,
}

impl ClientConfig {
    pub fn matches(&self, ip: std::net::IpAddr) -> bool {
        self.network.contains(&ip)
    }
}

