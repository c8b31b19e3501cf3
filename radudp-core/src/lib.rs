#![forbid(unsafe_code)]

pub mod addr;
pub mod attribute;
pub mod bootstrap;
pub mod client_table;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod framing;
pub mod listener;
pub mod metrics;
pub mod protodefs;
pub mod reply_queue;
pub mod socket_pool;
pub mod telemetry;
pub mod upstream;

pub use addr::{addr_equal, port_get};
pub use attribute::{Attribute, AttributeListExt};
pub use bootstrap::UdpTransport;
pub use client_table::{Client, ClientTable};
pub use config::{load_from_path, ClientConfig, Config, LoggingConfig, ServerConfig, TimeoutConfig};
pub use dispatch::{Dispatcher, ReplyHandler, Request, UpstreamReply};
pub use error::{CoreError, Result};
pub use metrics::{TransportMetrics, TransportSnapshot};
pub use protodefs::{ProtocolDefaults, UDP};
pub use reply_queue::{QueuedReply, ReplyQueue};
pub use socket_pool::ClientSockPool;
