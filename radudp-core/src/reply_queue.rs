use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Weak};

use tokio::net::UdpSocket;
use tokio::sync::Notify;

use crate::client_table::Client;

/// A reply waiting to be written back to its originating peer.
///
/// `from` is a [`Weak`] reference rather than a strong `Arc<Client>`: this
/// is the whole trick that lets eviction replace the original's nested
/// peer-config/replyq mutex "scrub" pass. Once [`ClientTable::match_or_insert`]
/// retires a client (dropping the table's strong `Arc`), every queued reply
/// that still names it simply fails to upgrade — there is no separate pass
/// that has to walk the queue and rewrite it.
pub struct QueuedReply {
    pub from: Weak<Client>,
    pub socket: Arc<UdpSocket>,
    pub buf: Vec<u8>,
}

/// A single-writer-thread, multi-producer reply queue (spec.md §4.G).
/// `Notify` stands in for the original's condition variable: producers
/// enqueue then `notify_one`, and the writer's `notified().await` is
/// armed *before* it inspects the queue, closing the usual
/// check-then-wait race per tokio's own `Notify` documentation.
#[derive(Default)]
pub struct ReplyQueue {
    queue: Mutex<VecDeque<QueuedReply>>,
    notify: Notify,
}

impl ReplyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, reply: QueuedReply) {
        self.queue.lock().expect("reply queue lock poisoned").push_back(reply);
        self.notify.notify_one();
    }

    /// Waits for and removes the next reply. Returns `None` only if the
    /// queue was notified spuriously with nothing in it (never observed
    /// in practice, but `pop` loops to be exact about the race window).
    pub async fn pop(&self) -> QueuedReply {
        loop {
            let notified = self.notify.notified();
            if let Some(reply) = self.try_pop() {
                return reply;
            }
            notified.await;
            if let Some(reply) = self.try_pop() {
                return reply;
            }
        }
    }

    fn try_pop(&self) -> Option<QueuedReply> {
        self.queue.lock().expect("reply queue lock poisoned").pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().expect("reply queue lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

