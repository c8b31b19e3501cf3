//! The upstream reader loop (`udpclientrd`, spec.md §4.F) and send path
//! (`clientradputudp`, spec.md §4.J).

use std::sync::Arc;

use tokio::net::UdpSocket;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::dispatch::{ReplyHandler, UpstreamReply};
use crate::framing::recv_framed;
use crate::metrics::TransportMetrics;

/// Runs the reader loop for one pooled outbound socket, matching every
/// well-formed reply to the upstream server it came from and handing it to
/// `reply_handler`. Unlike the server-side listener, there is no per-peer
/// client table here — spec.md §4.D's "upstream side" branch just returns
/// the first server on the matched peer config, with no expiry tracking.
pub async fn run_upstream_reader(
    socket: Arc<UdpSocket>,
    servers: Arc<Vec<ServerConfig>>,
    metrics: Arc<TransportMetrics>,
    reply_handler: Arc<dyn ReplyHandler>,
    mut shutdown: watch::Receiver<bool>,
) {
    let local_addr = socket.local_addr().ok();
    loop {
        let lookup = |from: std::net::SocketAddr| -> Option<ServerConfig> {
            servers.iter().find(|s| s.address == from).cloned()
        };

        tokio::select! {
            biased;
            changed = shutdown.changed() => {
                if changed.is_ok() && *shutdown.borrow() {
                    info!(?local_addr, "upstream reader shutting down");
                    break;
                }
            }
            result = recv_framed(&socket, lookup, &metrics) => {
                match result {
                    Ok(Some(framed)) => {
                        let reply_handler = Arc::clone(&reply_handler);
                        tokio::spawn(async move {
                            reply_handler
                                .handle_reply(UpstreamReply { buf: framed.buf, server: framed.peer })
                                .await;
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

/// Sends a pre-encoded RADIUS buffer to `server` on `socket`, fire-and-forget.
/// Returns `true` on success, `false` on any failure (including an empty
/// buffer) — there is no retry at this layer; that policy belongs to the
/// external proxy core (spec.md §4.J).
///
/// Preserves spec.md's unresolved Open Question as-is: `server.address` is
/// always the single destination this core sends to, with no fallback to a
/// second resolved hostport if the send fails.
pub async fn send_to_server(socket: &UdpSocket, server: &ServerConfig, buf: &[u8]) -> bool {
    if buf.is_empty() {
        return false;
    }
    match socket.send_to(buf, server.address).await {
        Ok(_) => true,
        Err(err) => {
            warn!(server = %server.name, error = %err, "failed to send to upstream server");
            false
        }
    }
}

