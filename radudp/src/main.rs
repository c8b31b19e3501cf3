#![forbid(unsafe_code)]

use std::future::Future;
use std::pin::Pin;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use radudp_core::{
    config::load_from_path, telemetry::init_tracing, Dispatcher, ReplyHandler, Request,
    TransportMetrics, UdpTransport, UpstreamReply,
};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "RADIUS-over-UDP proxy transport daemon")]
struct Cli {
    /// Path to configuration TOML file
    #[arg(short, long, value_name = "FILE", default_value = "radudp.toml")]
    config: PathBuf,
}

/// Reference `Dispatcher`/`ReplyHandler` pair: the binary's only RADIUS
/// "semantics" are to log what arrived. A real deployment of this core
/// would inject its own proxy dispatcher here instead — the core has no
/// knowledge of, or dependency on, what a request means.
struct LoggingDispatcher;

impl Dispatcher for LoggingDispatcher {
    fn dispatch(&self, request: Request) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(async move {
            info!(peer = %request.from.addr(), len = request.buf.len(), "received request");
        })
    }
}

struct LoggingReplyHandler;

impl ReplyHandler for LoggingReplyHandler {
    fn handle_reply(&self, reply: UpstreamReply) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(async move {
            info!(server = %reply.server.name, len = reply.buf.len(), "received upstream reply");
        })
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let cfg = match load_from_path(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            // Tracing isn't initialized yet if the config itself couldn't be
            // read, so the logging-level failure is reported on stderr.
            eprintln!("failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = init_tracing(&cfg.logging.level, cfg.logging.show_target) {
        eprintln!("failed to initialize tracing: {err}");
        std::process::exit(1);
    }

    info!(
        listeners = cfg.listen.len(),
        clients = cfg.clients.len(),
        servers = cfg.servers.len(),
        "configuration loaded"
    );

    let dispatcher: Arc<dyn Dispatcher> = Arc::new(LoggingDispatcher);
    let reply_handler: Arc<dyn ReplyHandler> = Arc::new(LoggingReplyHandler);

    let transport = match UdpTransport::bootstrap(&cfg, dispatcher, reply_handler).await {
        Ok(transport) => transport,
        Err(err) => {
            error!(%err, "failed to bootstrap transport");
            std::process::exit(1);
        }
    };

    tokio::spawn(report_metrics_periodically(Arc::clone(&transport.metrics)));

    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(%err, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received, stopping transport");
    transport.shutdown();
}

async fn report_metrics_periodically(metrics: Arc<TransportMetrics>) {
    let mut interval = tokio::time::interval(Duration::from_secs(60));
    loop {
        interval.tick().await;
        let snap = metrics.snapshot();
        info!(
            clients_created = snap.clients_created,
            clients_expired = snap.clients_expired,
            dropped_unknown_peer = snap.datagrams_dropped_unknown_peer,
            dropped_bad_length = snap.datagrams_dropped_bad_length,
            dropped_short = snap.datagrams_dropped_short,
            replies_sent = snap.replies_sent,
            replies_dropped_stale = snap.replies_dropped_stale,
            replies_dropped_send_error = snap.replies_dropped_send_error,
            "transport metrics"
        );
    }
}
