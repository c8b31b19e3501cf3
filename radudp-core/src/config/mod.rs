mod client;
mod loader;
mod logging;
mod root;
mod server;
mod timeout;

pub use client::ClientConfig;
pub use loader::load_from_path;
pub use logging::LoggingConfig;
pub use root::Config;
pub use server::ServerConfig;
pub use timeout::TimeoutConfig;
