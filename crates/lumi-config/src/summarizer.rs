use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Gemini `generateContent` settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummarizerConfig {
    /// API key sent as `x-goog-api-key`
    pub api_key: SecretString,
    /// Model name without the `models/` prefix
    #[serde(default = "default_model")]
    pub model: String,
    /// API root, including the version segment
    #[serde(default = "default_base_url")]
    pub base_url: Url,
}

fn default_model() -> String {
    "gemini-2.5-pro".to_string()
}

fn default_base_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1").expect("valid default URL")
}
