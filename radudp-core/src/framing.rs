use std::net::SocketAddr;

use tokio::net::UdpSocket;
use tracing::{debug, warn};

use crate::metrics::TransportMetrics;

/// Minimum accepted RADIUS packet length: a bare 20-byte header.
pub const MIN_RADIUS_LEN: usize = 20;
/// Hard ceiling for RADIUS over UDP (spec: oversized datagrams are dropped,
/// not truncated and accepted).
pub const MAX_RADIUS_LEN: usize = 4096;

/// Oversized scratch buffer used to emulate `MSG_TRUNC` on platforms
/// (all of them, via tokio) where the true datagram size is only knowable
/// by reading into a buffer at least as big as the largest possible
/// datagram.
const SCRATCH_LEN: usize = MAX_RADIUS_LEN;

/// Outcome of one framed receive attempt.
pub struct Framed<L> {
    pub from: SocketAddr,
    pub peer: L,
    pub buf: Vec<u8>,
}

/// Reads the RADIUS length field (bytes 2..4, big-endian) out of a 4-byte
/// header prefix and validates it against the accepted [20, 4096] range.
/// Returns `None` for anything outside that range, mirroring
/// `get_checked_rad_length`'s negative-on-invalid contract.
pub fn get_checked_rad_length(header: &[u8; 4]) -> Option<usize> {
    let len = u16::from_be_bytes([header[2], header[3]]) as usize;
    if (MIN_RADIUS_LEN..=MAX_RADIUS_LEN).contains(&len) {
        Some(len)
    } else {
        None
    }
}

/// Runs the framed-datagram critical loop (spec.md §4.D) once: peek the
/// 4-byte header, look the sender up via `lookup`, validate the declared
/// length, then receive and return exactly that many bytes. Datagrams from
/// unmatched senders or carrying an invalid length are drained and the
/// function returns `None` — the caller loops and tries again.
pub async fn recv_framed<L>(
    socket: &UdpSocket,
    lookup: impl Fn(SocketAddr) -> Option<L>,
    metrics: &TransportMetrics,
) -> std::io::Result<Option<Framed<L>>> {
    let mut peek_buf = [0u8; 4];
    let (_, from) = socket.peek_from(&mut peek_buf).await?;

    let Some(peer) = lookup(from) else {
        drain(socket).await?;
        metrics.datagram_dropped_unknown_peer();
        debug!(%from, "dropping datagram from unrecognized peer");
        return Ok(None);
    };

    let Some(declared_len) = get_checked_rad_length(&peek_buf) else {
        drain(socket).await?;
        metrics.datagram_dropped_bad_length();
        warn!(%from, "dropping datagram with invalid RADIUS length field");
        return Ok(None);
    };

    let mut scratch = [0u8; SCRATCH_LEN];
    let (received, recv_from) = socket.recv_from(&mut scratch).await?;

    if received < declared_len {
        metrics.datagram_dropped_short();
        warn!(
            %from,
            declared_len,
            received,
            "dropping short datagram (fewer bytes than declared length)"
        );
        return Ok(None);
    }
    if received > declared_len {
        debug!(%from, declared_len, received, "datagram padded beyond declared length, truncating");
    }

    Ok(Some(Framed {
        from: recv_from,
        peer,
        buf: scratch[..declared_len].to_vec(),
    }))
}

async fn drain(socket: &UdpSocket) -> std::io::Result<()> {
    let mut zero = [0u8; 0];
    socket.recv_from(&mut zero).await?;
    Ok(())
}

