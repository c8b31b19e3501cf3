//! Trait seams standing in for spec.md §6's external collaborators
//! (`radsrv`, `replyh`): this core frames datagrams and tracks peers, but
//! has no notion of what a RADIUS request *means*. A caller injects its own
//! implementation of these traits, the same way the teacher injects
//! `ClientPool`/`DnsCache` into `TcpHandler` rather than hardcoding them.
//!
//! Both traits are consumed as `Arc<dyn Dispatcher>` / `Arc<dyn ReplyHandler>`
//! by the listener/upstream loops, so the method signatures return a boxed
//! future by hand instead of depending on `async-trait` — the teacher's own
//! `tls/reloader.rs` reaches for that crate without ever declaring it in a
//! `Cargo.toml` in this pack, so it isn't a dependency this core can
//! actually rely on being fetchable.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::net::UdpSocket;

use crate::client_table::Client;
use crate::config::ServerConfig;
use crate::reply_queue::{QueuedReply, ReplyQueue};

type BoxFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// A datagram received on a server-side listener socket, identified to its
/// originating (possibly freshly-created) client record.
///
/// Carries exactly the fields spec.md's `Request` names: the buffer, the
/// `from` client (held strongly here — the dispatcher is free to hold onto
/// it, `queue_reply` only downgrades it at the moment a reply is actually
/// enqueued), the receive socket, and (implicitly) a handle back to this
/// listener's reply queue so the dispatcher can hand a reply back without
/// this core needing to know what the reply payload means.
pub struct Request {
    pub buf: Vec<u8>,
    pub from: Arc<Client>,
    socket: Arc<UdpSocket>,
    replyq: Arc<ReplyQueue>,
}

impl Request {
    pub fn new(buf: Vec<u8>, from: Arc<Client>, socket: Arc<UdpSocket>, replyq: Arc<ReplyQueue>) -> Self {
        Self { buf, from, socket, replyq }
    }

    /// Enqueues `buf` as a reply bound for this request's originating peer.
    /// The enqueued reply holds only a `Weak` reference to `from` — if the
    /// client has been evicted by the time the writer drains this entry,
    /// the weak upgrade fails and the reply is silently dropped, exactly as
    /// spec.md §4.G / §8 scenario 6 describes.
    pub fn queue_reply(&self, buf: Vec<u8>) {
        self.replyq.push(QueuedReply {
            from: Arc::downgrade(&self.from),
            socket: Arc::clone(&self.socket),
            buf,
        });
    }
}

/// Stands in for the original's `radsrv(rq)`: handed every request this
/// core successfully frames and identifies a peer for.
pub trait Dispatcher: Send + Sync + 'static {
    fn dispatch(&self, request: Request) -> BoxFuture<'_>;
}

/// A datagram received from an upstream server on a pooled outbound socket.
pub struct UpstreamReply {
    pub buf: Vec<u8>,
    pub server: ServerConfig,
}

/// Stands in for the original's `replyh(server, buf, len)`.
pub trait ReplyHandler: Send + Sync + 'static {
    fn handle_reply(&self, reply: UpstreamReply) -> BoxFuture<'_>;
}
