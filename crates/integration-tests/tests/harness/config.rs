//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use lumi_config::{
    CatalogConfig, Config, CorsConfig, ServerConfig, SpeechConfig, SummarizerConfig, UpstreamConfig,
};
use secrecy::SecretString;

use super::mock_upstream::MockUpstream;

pub const GEMINI_KEY: &str = "test-gemini-key";
pub const ELEVENLABS_KEY: &str = "test-elevenlabs-key";
pub const VOICE_ID: &str = "test-voice";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// All providers pointed at the mock upstream
    pub fn new(mock: &MockUpstream) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: SocketAddr::from(([127, 0, 0, 1], 0)),
                    ..ServerConfig::default()
                },
                upstream: UpstreamConfig {
                    timeout: "5s".to_owned(),
                    connect_timeout: "1s".to_owned(),
                },
                summarizer: SummarizerConfig {
                    api_key: SecretString::from(GEMINI_KEY),
                    model: "gemini-2.5-pro".to_owned(),
                    base_url: mock.url("/gemini/v1").parse().expect("valid URL"),
                },
                speech: SpeechConfig {
                    api_key: SecretString::from(ELEVENLABS_KEY),
                    voice_id: VOICE_ID.to_owned(),
                    model_id: "eleven_monolingual_v1".to_owned(),
                    stability: 0.5,
                    similarity_boost: 0.5,
                    base_url: mock.url("/elevenlabs/v1").parse().expect("valid URL"),
                },
                catalog: CatalogConfig {
                    base_url: mock.url("/openlibrary").parse().expect("valid URL"),
                    search_limit: 10,
                },
                telemetry: None,
            },
        }
    }

    /// Point the catalog somewhere that refuses connections
    pub fn with_unreachable_catalog(mut self) -> Self {
        self.config.catalog.base_url = "http://127.0.0.1:9".parse().expect("valid URL");
        self
    }

    pub fn with_upload_limit(mut self, bytes: usize) -> Self {
        self.config.server.upload_limit = bytes;
        self
    }

    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = config;
        self
    }

    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
