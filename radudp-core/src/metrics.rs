//! Plain atomic counters for this transport's drop/evict/send outcomes.
//!
//! No metrics exporter is wired in — this core has no HTTP surface of its
//! own — but a headless proxy without any visibility into discard rates
//! isn't something this corpus ships, so the counters exist for a caller
//! (the binary, or its own telemetry endpoint) to read and expose however
//! it likes.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct TransportMetrics {
    clients_created: AtomicU64,
    clients_expired: AtomicU64,
    datagrams_dropped_unknown_peer: AtomicU64,
    datagrams_dropped_bad_length: AtomicU64,
    datagrams_dropped_short: AtomicU64,
    replies_sent: AtomicU64,
    replies_dropped_stale: AtomicU64,
    replies_dropped_send_error: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TransportSnapshot {
    pub clients_created: u64,
    pub clients_expired: u64,
    pub datagrams_dropped_unknown_peer: u64,
    pub datagrams_dropped_bad_length: u64,
    pub datagrams_dropped_short: u64,
    pub replies_sent: u64,
    pub replies_dropped_stale: u64,
    pub replies_dropped_send_error: u64,
}

impl TransportMetrics {
    pub fn client_created(&self) {
        self.clients_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn client_expired(&self) {
        self.clients_expired.fetch_add(1, Ordering::Relaxed);
    }

    pub fn datagram_dropped_unknown_peer(&self) {
        self.datagrams_dropped_unknown_peer
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn datagram_dropped_bad_length(&self) {
        self.datagrams_dropped_bad_length
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn datagram_dropped_short(&self) {
        self.datagrams_dropped_short.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reply_sent(&self) {
        self.replies_sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reply_dropped_stale(&self) {
        self.replies_dropped_stale.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reply_dropped_send_error(&self) {
        self.replies_dropped_send_error
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> TransportSnapshot {
        TransportSnapshot {
            clients_created: self.clients_created.load(Ordering::Relaxed),
            clients_expired: self.clients_expired.load(Ordering::Relaxed),
            datagrams_dropped_unknown_peer: self
                .datagrams_dropped_unknown_peer
                .load(Ordering::Relaxed),
            datagrams_dropped_bad_length: self
                .datagrams_dropped_bad_length
                .load(Ordering::Relaxed),
            datagrams_dropped_short: self.datagrams_dropped_short.load(Ordering::Relaxed),
            replies_sent: self.replies_sent.load(Ordering::Relaxed),
            replies_dropped_stale: self.replies_dropped_stale.load(Ordering::Relaxed),
            replies_dropped_send_error: self.replies_dropped_send_error.load(Ordering::Relaxed),
        }
    }
}

