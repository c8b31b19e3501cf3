use thiserror::Error;

/// Errors that can occur while configuring or binding this transport core.
///
/// Per-datagram runtime failures (bad framing, unknown peer, send failure)
/// are never represented here — they're absorbed with `tracing` at the call
/// site and the receive/send loop simply continues, matching the error
/// disposition table in the transport's design.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to bind outbound socket to {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("attribute value too long: {0} bytes (max 255)")]
    AttributeTooLong(usize),

    #[error("no listeners configured")]
    NoListeners,

    #[error("no servers configured")]
    NoServers,
}

pub type Result<T> = std::result::Result<T, CoreError>;
