//! Bootstrap wiring (`initextraudp`, `udpsetsrcres`, spec.md §4.I): binds
//! every configured listener, assigns an outbound socket per upstream
//! server, and spawns the reader/writer tasks.
//!
//! Grounded on `proxy/server.rs::run`'s setup-then-spawn-then-serve shape,
//! minus the HTTP serving — this crate has no request loop of its own to
//! run; it hands requests to an injected [`Dispatcher`] and proxied replies
//! to an injected [`ReplyHandler`].

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::sync::watch;
use tracing::info;

use crate::client_table::ClientTable;
use crate::config::{Config, ServerConfig};
use crate::dispatch::{Dispatcher, ReplyHandler};
use crate::error::{CoreError, Result};
use crate::listener::{run_listener, run_writer};
use crate::metrics::TransportMetrics;
use crate::reply_queue::ReplyQueue;
use crate::socket_pool::ClientSockPool;
use crate::upstream::{run_upstream_reader, send_to_server};

/// A running transport instance: every listener/writer/upstream-reader
/// task has been spawned, and the outbound socket pool is fully built.
/// Dropping the returned `shutdown` sender (or sending `true` on it) stops
/// every task that was spawned as part of this bootstrap.
pub struct UdpTransport {
    pub pool: Arc<ClientSockPool>,
    pub metrics: Arc<TransportMetrics>,
    default_source: Option<IpAddr>,
    shutdown_tx: watch::Sender<bool>,
}

impl UdpTransport {
    /// Binds every `cfg.listen` address, assigns a pooled outbound socket
    /// for every `cfg.servers` entry, and spawns one listener task + one
    /// writer task per listener plus one reader task per pooled outbound
    /// socket. Returns as soon as every socket is bound and every task is
    /// spawned; the tasks themselves run until `shutdown()` is called.
    pub async fn bootstrap(
        cfg: &Config,
        dispatcher: Arc<dyn Dispatcher>,
        reply_handler: Arc<dyn ReplyHandler>,
    ) -> Result<Self> {
        if cfg.listen.is_empty() {
            return Err(CoreError::NoListeners);
        }
        if cfg.servers.is_empty() {
            return Err(CoreError::NoServers);
        }

        let metrics = Arc::new(TransportMetrics::default());
        let client_configs = Arc::new(cfg.clients.clone());
        let servers = Arc::new(cfg.servers.clone());
        let default_idle = Duration::from_secs(cfg.timeout.client_idle_secs);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        // Outbound socket pool (`addserverextraudp`): one assignment per
        // configured server. A bind failure here is fatal to startup,
        // matching spec.md §4.H/§7's "fatal for this server" disposition.
        let pool = Arc::new(ClientSockPool::new());
        for server in servers.iter() {
            pool.assign(server, cfg.default_source).await?;
        }

        // `udpsetsrcres`: the module-wide default source is only consulted
        // during pool assignment above; nothing is retained afterward,
        // matching spec.md §4.I ("release srcres" once sockets are built).
        for socket in pool.sockets() {
            let servers = Arc::clone(&servers);
            let metrics = Arc::clone(&metrics);
            let reply_handler = Arc::clone(&reply_handler);
            let shutdown = shutdown_rx.clone();
            tokio::spawn(run_upstream_reader(socket, servers, metrics, reply_handler, shutdown));
        }

        for listen_addr in &cfg.listen {
            let socket = Arc::new(UdpSocket::bind(listen_addr).await.map_err(|e| CoreError::Bind {
                addr: *listen_addr,
                source: e,
            })?);
            info!(%listen_addr, "listening for RADIUS datagrams");

            let clients = Arc::new(ClientTable::new(default_idle));
            let replyq = Arc::new(ReplyQueue::new());

            let listener_shutdown = shutdown_rx.clone();
            tokio::spawn(run_listener(
                Arc::clone(&socket),
                Arc::clone(&client_configs),
                default_idle,
                clients,
                Arc::clone(&metrics),
                Arc::clone(&dispatcher),
                Arc::clone(&replyq),
                listener_shutdown,
            ));

            let writer_shutdown = shutdown_rx.clone();
            tokio::spawn(run_writer(replyq, Arc::clone(&metrics), writer_shutdown));
        }

        Ok(Self {
            pool,
            metrics,
            default_source: cfg.default_source,
            shutdown_tx,
        })
    }

    /// Sends `buf` to `server`, reusing (or lazily binding) the pool's
    /// outbound socket for it — the named send path from spec.md §4.J
    /// (`clientradputudp`), without requiring the caller to invoke
    /// [`ClientSockPool::assign`] itself first. Fire-and-forget: see
    /// [`send_to_server`](crate::upstream::send_to_server) for the exact
    /// success/failure contract.
    pub async fn send_to_server(&self, server: &ServerConfig, buf: &[u8]) -> Result<bool> {
        let socket = self.pool.assign(server, self.default_source).await?;
        Ok(send_to_server(&socket, server, buf).await)
    }

    /// Signals every spawned task to stop its accept/read loop. Spec.md §5
    /// says shutdown is "not gracefully modeled" by the original core — this
    /// is an ambient addition for a library consumer that wants to tear the
    /// transport down without exiting the process.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}

