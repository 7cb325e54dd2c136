use std::time::Duration;

use lumi_config::UpstreamConfig;
use reqwest::Client;

/// Build the HTTP client shared by every upstream provider
///
/// `reqwest::Client` is reference counted; clones share one connection pool.
pub fn http_client(config: &UpstreamConfig) -> anyhow::Result<Client> {
    Client::builder()
        .timeout(config.timeout_duration()?)
        .connect_timeout(config.connect_timeout_duration()?)
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .user_agent(concat!("lumi/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build upstream HTTP client: {e}"))
}
