use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::metrics::TransportMetrics;

/// A per-peer record keyed by source address, the Rust analogue of the
/// original transport's `client` struct. Replies queued for this peer hold
/// only a [`std::sync::Weak`] reference into the table's `Arc`, so evicting
/// a client — dropping its strong `Arc` here — makes every queued reply's
/// `upgrade()` fail atomically. This replaces the original's nested
/// peer-config/replyq mutex "scrub on evict" pass entirely: there is
/// nothing left to scrub, stale references simply fail to upgrade.
#[derive(Debug)]
pub struct Client {
    addr: SocketAddr,
    idle_timeout: Duration,
    last_seen: Mutex<Instant>,
}

impl Client {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn touch(&self) {
        *self.last_seen.lock().expect("client last_seen lock poisoned") = Instant::now();
    }

    fn is_expired(&self) -> bool {
        let last = *self.last_seen.lock().expect("client last_seen lock poisoned");
        last.elapsed() > self.idle_timeout
    }
}

/// The table of currently-known peers for one listener, keyed by source
/// address. Matches spec.md §4.D step 7's combined match-or-insert pass:
/// every receive both looks up the sender and opportunistically evicts
/// anything that has gone idle past its timeout.
pub struct ClientTable {
    clients: Mutex<Vec<Arc<Client>>>,
    default_idle_timeout: Duration,
}

impl ClientTable {
    pub fn new(default_idle_timeout: Duration) -> Self {
        Self {
            clients: Mutex::new(Vec::new()),
            default_idle_timeout,
        }
    }

    /// Finds the client for `addr`, evicting anything idle past its
    /// timeout along the way, inserting a fresh record if none matched.
    /// Eviction applies to the matching address too: a peer whose record
    /// has gone idle past its timeout gets a brand new `Arc<Client>` here,
    /// not a refresh of the old one, so a reply queued against the old
    /// record fails to `upgrade()` once this returns (spec.md §8). A
    /// datagram arriving *before* the idle window elapses still refreshes
    /// the existing record's `last_seen` in place.
    /// `idle_override` lets a caller apply a per-client-config idle window
    /// (spec.md's `ClientConfig::idle_secs`) instead of the table default;
    /// it only takes effect when a *new* client is created — an existing
    /// client keeps the idle window it was created with.
    pub fn match_or_insert(
        &self,
        addr: SocketAddr,
        idle_override: Option<Duration>,
        metrics: &TransportMetrics,
    ) -> Arc<Client> {
        let mut guard = self.clients.lock().expect("client table lock poisoned");

        let mut evicted = 0u64;
        guard.retain(|c| {
            let keep = !c.is_expired();
            if !keep {
                evicted += 1;
            }
            keep
        });
        for _ in 0..evicted {
            metrics.client_expired();
        }

        if let Some(existing) = guard.iter().find(|c| c.addr == addr) {
            existing.touch();
            return Arc::clone(existing);
        }

        let fresh = Arc::new(Client {
            addr,
            idle_timeout: idle_override.unwrap_or(self.default_idle_timeout),
            last_seen: Mutex::new(Instant::now()),
        });
        guard.push(Arc::clone(&fresh));
        metrics.client_created();
        fresh
    }

    /// Number of currently-tracked (non-evicted) clients.
    pub fn len(&self) -> usize {
        self.clients.lock().expect("client table lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

