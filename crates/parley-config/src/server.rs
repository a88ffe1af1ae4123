use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

use crate::{cors::CorsConfig, health::HealthConfig};

/// HTTP listener configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind, all interfaces on port 8000 by default
    #[serde(default = "default_listen_address")]
    pub listen_address: SocketAddr,
    /// Directory holding `index.html` and the front-end assets
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            static_dir: default_static_dir(),
            health: HealthConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

fn default_listen_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}
