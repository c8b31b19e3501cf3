use tracing_subscriber::EnvFilter;

/// Initialize the global `tracing` subscriber, following the same
/// `RUST_LOG`-override-first, formatted-fallback shape as the teacher's
/// `main.rs` init routine, minus the OpenTelemetry layer — this core has no
/// HTTP surface of its own to export traces over.
pub fn init_tracing(log_level: &str, show_target: bool) -> Result<(), String> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(show_target)
        .try_init()
        .map_err(|e| format!("failed to set global tracing subscriber: {e}"))
}
