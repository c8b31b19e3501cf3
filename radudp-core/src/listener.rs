//! The server-side listener loop (`udpserverrd`, spec.md §4.E) and its
//! companion reply writer (`udpserverwr`, spec.md §4.G).
//!
//! Grounded on `tcp/handler.rs::TcpHandler::run`'s `tokio::select!` against
//! a `watch::Receiver<bool>` shutdown signal — this core follows the same
//! shape, one `tokio::task` per bound socket rather than an OS thread, for
//! symmetry with how a future multi-transport proxy would drive both.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::client_table::ClientTable;
use crate::config::ClientConfig;
use crate::dispatch::{Dispatcher, Request};
use crate::framing::recv_framed;
use crate::metrics::TransportMetrics;
use crate::reply_queue::ReplyQueue;

/// Runs the accept/frame/dispatch loop for one bound listener socket until
/// `shutdown` fires. Spec.md §5 notes that shutdown "is not gracefully
/// modeled by this core; processes exit" — that remains true for the core's
/// *default* posture, but the loop still exposes the hook so a caller that
/// wants to stop it can.
#[allow(clippy::too_many_arguments)]
pub async fn run_listener(
    socket: Arc<UdpSocket>,
    client_configs: Arc<Vec<ClientConfig>>,
    default_idle: Duration,
    clients: Arc<ClientTable>,
    metrics: Arc<TransportMetrics>,
    dispatcher: Arc<dyn Dispatcher>,
    replyq: Arc<ReplyQueue>,
    mut shutdown: watch::Receiver<bool>,
) {
    let local_addr = socket.local_addr().ok();
    loop {
        let lookup = |from: SocketAddr| -> Option<Arc<crate::client_table::Client>> {
            let matched = client_configs.iter().find(|c| c.matches(from.ip()))?;
            let idle_override = matched.idle_secs.map(Duration::from_secs).or(Some(default_idle));
            Some(clients.match_or_insert(from, idle_override, &metrics))
        };

        tokio::select! {
            biased;
            changed = shutdown.changed() => {
                if changed.is_ok() && *shutdown.borrow() {
                    info!(?local_addr, "listener shutting down");
                    break;
                }
            }
            result = recv_framed(&socket, lookup, &metrics) => {
                match result {
                    Ok(Some(framed)) => {
                        let request =
                            Request::new(framed.buf, framed.peer, Arc::clone(&socket), Arc::clone(&replyq));
                        let dispatcher = Arc::clone(&dispatcher);
                        tokio::spawn(async move {
                            dispatcher.dispatch(request).await;
                        });
                    }
                    Ok(None) => continue,
                    Err(err) => {
                        warn!(?local_addr, error = %err, "transient receive error, retrying");
                        continue;
                    }
                }
            }
        }
    }
}

/// Runs the single reply-writer loop for one listener (spec.md §4.G),
/// draining the shared reply queue and sending each reply back on the
/// socket it was recorded against. The `from` weak reference is upgraded
/// once, synchronously, right before the send — there is no separate
/// "snapshot under lock then release" step to get wrong, since a failed
/// upgrade already means the destination no longer exists.
pub async fn run_writer(replyq: Arc<ReplyQueue>, metrics: Arc<TransportMetrics>, mut shutdown: watch::Receiver<bool>) {
    loop {
        let reply = tokio::select! {
            biased;
            changed = shutdown.changed() => {
                if changed.is_ok() && *shutdown.borrow() {
                    info!("reply writer shutting down");
                    break;
                }
                continue;
            }
            reply = replyq.pop() => reply,
        };

        let Some(client) = reply.from.upgrade() else {
            metrics.reply_dropped_stale();
            continue;
        };

        match reply.socket.send_to(&reply.buf, client.addr()).await {
            Ok(_) => metrics.reply_sent(),
            Err(err) => {
                metrics.reply_dropped_send_error();
                warn!(peer = %client.addr(), error = %err, "failed to send reply, dropping");
            }
        }
    }
}

