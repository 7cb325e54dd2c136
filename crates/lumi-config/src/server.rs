use std::net::SocketAddr;

use serde::Deserialize;

use crate::{cors::CorsConfig, health::HealthConfig};

/// Largest accepted `/summarize` upload when not configured (25 MiB)
pub const DEFAULT_UPLOAD_LIMIT: usize = 25 << 20;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_listen_address")]
    pub listen_address: SocketAddr,
    /// Request body limit for uploads, in bytes
    #[serde(default = "default_upload_limit")]
    pub upload_limit: usize,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            upload_limit: DEFAULT_UPLOAD_LIMIT,
            health: HealthConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

fn default_listen_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

#[allow(clippy::missing_const_for_fn)]
fn default_upload_limit() -> usize {
    DEFAULT_UPLOAD_LIMIT
}
