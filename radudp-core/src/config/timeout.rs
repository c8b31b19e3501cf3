use serde::Deserialize;

/// Timing tunables for the transport core.
#[derive(Debug, Deserialize, Clone)]
pub struct TimeoutConfig {
    /// How long an idle per-peer client record survives without a matching
    /// datagram before it is evicted on the next receive pass.
    /// Default: 60 seconds (spec.md §3's "expiry invariant").
    #[serde(default = "default_client_idle_secs")]
    pub client_idle_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            client_idle_secs: default_client_idle_secs(),
        }
    }
}

fn default_client_idle_secs() -> u64 {
    60
}

