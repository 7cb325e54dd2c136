use std::time::Duration;

use serde::Deserialize;

/// Settings shared by every outbound provider call
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Total request timeout (e.g. "120s", "2m")
    #[serde(default = "default_timeout")]
    pub timeout: String,
    /// TCP connect timeout
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl UpstreamConfig {
    /// Parsed request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is not a valid duration string
    pub fn timeout_duration(&self) -> anyhow::Result<Duration> {
        parse_duration("upstream.timeout", &self.timeout)
    }

    /// Parsed connect timeout
    ///
    /// # Errors
    ///
    /// Returns an error if `connect_timeout` is not a valid duration string
    pub fn connect_timeout_duration(&self) -> anyhow::Result<Duration> {
        parse_duration("upstream.connect_timeout", &self.connect_timeout)
    }
}

fn parse_duration(field: &str, value: &str) -> anyhow::Result<Duration> {
    duration_str::parse(value).map_err(|e| anyhow::anyhow!("invalid duration for {field} '{value}': {e}"))
}

fn default_timeout() -> String {
    "120s".to_string()
}

fn default_connect_timeout() -> String {
    "10s".to_string()
}
