use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{CoreError, Result};

pub fn load_from_path<P: AsRef<Path>>(p: P) -> Result<Config> {
    let txt = fs::read_to_string(p)
        .map_err(|e| CoreError::Config(format!("failed to read config file: {e}")))?;
    let cfg: Config =
        toml::from_str(&txt).map_err(|e| CoreError::Config(format!("failed to parse config: {e}")))?;

    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> Result<()> {
    if cfg.listen.is_empty() {
        return Err(CoreError::Config(
            "at least one `listen` address is required".into(),
        ));
    }

    if cfg.clients.is_empty() {
        return Err(CoreError::Config(
            "at least one `clients` entry is required".into(),
        ));
    }

    if cfg.servers.is_empty() {
        return Err(CoreError::NoServers);
    }

    let mut seen_networks = HashSet::new();
    for client in &cfg.clients {
        if !seen_networks.insert(client.network.to_string()) {
            return Err(CoreError::Config(format!(
                "duplicate client network: {}",
                client.network
            )));
        }
    }

    let mut seen_names = HashSet::new();
    for server in &cfg.servers {
        if !seen_names.insert(server.name.as_str()) {
            return Err(CoreError::Config(format!(
                "duplicate server name: {}",
                server.name
            )));
        }
    }

    Ok(())
}

