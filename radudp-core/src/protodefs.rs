//! Protocol defaults this transport exposes to the proxy core (spec.md §6).

use std::time::Duration;

/// Hard ceilings the proxy core enforces on top of whatever this transport
/// configures, inherited as constants rather than left to each transport to
/// reinvent.
pub const MAX_RETRY_COUNT: u32 = 10;
pub const MAX_RETRY_INTERVAL: Duration = Duration::from_secs(60);

/// Static description of this transport, analogous to the original's
/// `protodefs` record: a name, a socket kind, and default tunables the
/// proxy core falls back to when a server/client config doesn't override
/// them.
#[derive(Debug, Clone, Copy)]
pub struct ProtocolDefaults {
    pub name: &'static str,
    pub default_port: u16,
    pub default_retry_count: u32,
    pub default_retry_interval: Duration,
    pub default_duplicate_interval: Duration,
}

pub const UDP: ProtocolDefaults = ProtocolDefaults {
    name: "udp",
    default_port: 1812,
    default_retry_count: 2,
    default_retry_interval: Duration::from_secs(2),
    default_duplicate_interval: Duration::from_secs(5),
};

