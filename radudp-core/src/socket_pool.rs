//! The outbound socket pool (spec.md §4.H, `addserverextraudp`): a
//! dedup-by-source-bind-address set of outbound UDP sockets shared across
//! upstream server configurations.
//!
//! Grounded on `proxy/client_pool.rs`'s `ClientPool` shape — lazily build a
//! handle on first demand, reuse it on every subsequent request that
//! resolves to the same key — adapted from "dedup by HTTP version" to
//! "dedup by local bind address".

use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};

use socket2::{Domain, Socket, Type};
use tokio::net::{lookup_host, UdpSocket};
use tracing::debug;

use crate::config::ServerConfig;
use crate::error::{CoreError, Result};

struct PoolEntry {
    source: IpAddr,
    socket: Arc<UdpSocket>,
}

/// Append-only for the process lifetime (spec.md §4.H, §9 Open Question:
/// "no mechanism closes outbound pool sockets"): entries are never removed.
#[derive(Default)]
pub struct ClientSockPool {
    entries: Mutex<Vec<PoolEntry>>,
}

impl ClientSockPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns an outbound socket for `server`, reusing a pooled socket
    /// whose source bind address matches byte-for-byte, or binding a fresh
    /// one. `default_source` is the module-wide `srcres` fallback used when
    /// `server.source` is absent.
    pub async fn assign(
        &self,
        server: &ServerConfig,
        default_source: Option<IpAddr>,
    ) -> Result<Arc<UdpSocket>> {
        let dest_is_v4 = server.address.is_ipv4();
        for candidate in self.candidate_addrs(server, default_source).await? {
            if candidate.is_ipv4() != dest_is_v4 {
                continue;
            }

            if let Some(existing) = self.lookup(candidate) {
                return Ok(existing);
            }

            let socket = bind_source(candidate).await?;
            self.insert(candidate, Arc::clone(&socket));
            debug!(source = %candidate, server = %server.name, "bound new outbound socket");
            return Ok(socket);
        }

        Err(CoreError::Bind {
            addr: server.address,
            source: std::io::Error::other(format!(
                "no candidate source address for server '{}' matched its destination family",
                server.name
            )),
        })
    }

    async fn candidate_addrs(
        &self,
        server: &ServerConfig,
        default_source: Option<IpAddr>,
    ) -> Result<Vec<IpAddr>> {
        if let Some(source) = &server.source {
            let addrs: Vec<IpAddr> = lookup_host(format!("{source}:0"))
                .await
                .map_err(CoreError::Io)?
                .map(|sa| sa.ip())
                .collect();
            return Ok(addrs);
        }

        Ok(default_source.into_iter().collect())
    }

    fn lookup(&self, source: IpAddr) -> Option<Arc<UdpSocket>> {
        self.entries
            .lock()
            .expect("socket pool lock poisoned")
            .iter()
            .find(|e| e.source == source)
            .map(|e| Arc::clone(&e.socket))
    }

    fn insert(&self, source: IpAddr, socket: Arc<UdpSocket>) {
        self.entries
            .lock()
            .expect("socket pool lock poisoned")
            .push(PoolEntry { source, socket });
    }

    /// All currently-pooled sockets, for spawning one upstream-reader task
    /// per socket at bootstrap (spec.md §4.I).
    pub fn sockets(&self) -> Vec<Arc<UdpSocket>> {
        self.entries
            .lock()
            .expect("socket pool lock poisoned")
            .iter()
            .map(|e| Arc::clone(&e.socket))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("socket pool lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

async fn bind_source(addr: IpAddr) -> Result<Arc<UdpSocket>> {
    let bind_addr = SocketAddr::new(addr, 0);
    let domain = if addr.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
    let socket = Socket::new(domain, Type::DGRAM, None).map_err(|e| CoreError::Bind {
        addr: bind_addr,
        source: e,
    })?;
    socket.set_nonblocking(true).map_err(|e| CoreError::Bind {
        addr: bind_addr,
        source: e,
    })?;
    socket.bind(&bind_addr.into()).map_err(|e| CoreError::Bind {
        addr: bind_addr,
        source: e,
    })?;

    let std_socket: std::net::UdpSocket = socket.into();
    let tokio_socket = UdpSocket::from_std(std_socket).map_err(|e| CoreError::Bind {
        addr: bind_addr,
        source: e,
    })?;
    Ok(Arc::new(tokio_socket))
}

