use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// `ElevenLabs` text-to-speech settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeechConfig {
    /// API key sent as `xi-api-key`
    pub api_key: SecretString,
    /// Voice used when a request does not name one
    pub voice_id: String,
    /// Synthesis model
    #[serde(default = "default_model_id")]
    pub model_id: String,
    /// Voice stability (0.0 to 1.0)
    #[serde(default = "default_voice_setting")]
    pub stability: f64,
    /// Similarity boost (0.0 to 1.0)
    #[serde(default = "default_voice_setting")]
    pub similarity_boost: f64,
    /// API root, including the version segment
    #[serde(default = "default_base_url")]
    pub base_url: Url,
}

fn default_model_id() -> String {
    "eleven_monolingual_v1".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_voice_setting() -> f64 {
    0.5
}

fn default_base_url() -> Url {
    Url::parse("https://api.elevenlabs.io/v1").expect("valid default URL")
}
