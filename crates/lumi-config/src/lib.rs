#![allow(clippy::must_use_candidate)]

pub mod catalog;
pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod speech;
pub mod summarizer;
pub mod telemetry;
pub mod upstream;

use serde::Deserialize;

pub use catalog::*;
pub use cors::*;
pub use health::*;
pub use server::*;
pub use speech::*;
pub use summarizer::*;
pub use telemetry::TelemetryConfig;
pub use upstream::*;

/// Top-level Lumi configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Shared settings for outbound provider calls
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Summarization provider (Gemini)
    pub summarizer: SummarizerConfig,
    /// Speech synthesis provider (`ElevenLabs`)
    pub speech: SpeechConfig,
    /// Book catalog (Open Library)
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
