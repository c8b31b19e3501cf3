use serde::Deserialize;

/// Logging configuration, mirrored after the teacher's `LoggingConfig` but
/// trimmed to what a headless transport core needs: a level and whether to
/// show the tracing target in formatted output.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `RUST_LOG`-style filter directive, e.g. "info" or "radudp_core=debug".
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            show_target: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
