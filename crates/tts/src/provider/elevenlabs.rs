use async_trait::async_trait;
use http::StatusCode;
use lumi_config::SpeechConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    error::TtsError,
    types::{SpeechRequest, SpeechResponse},
};

use super::TtsProvider;

/// `ElevenLabs` TTS provider
pub struct ElevenLabsProvider {
    client: Client,
    base_url: Url,
    api_key: SecretString,
    default_voice: String,
    model_id: String,
    voice_settings: VoiceSettings,
    name: String,
}

impl ElevenLabsProvider {
    pub fn new(client: Client, config: &SpeechConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            default_voice: config.voice_id.clone(),
            model_id: config.model_id.clone(),
            voice_settings: VoiceSettings {
                stability: config.stability,
                similarity_boost: config.similarity_boost,
            },
            name: "elevenlabs".to_owned(),
        }
    }

    fn speech_url(&self, voice: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/text-to-speech/{voice}")
    }
}

#[derive(Debug, Clone, Copy, serde::Serialize)]
struct VoiceSettings {
    stability: f64,
    similarity_boost: f64,
}

#[derive(serde::Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[async_trait]
impl TtsProvider for ElevenLabsProvider {
    async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse> {
        let voice = request.voice.as_deref().unwrap_or(&self.default_voice);
        let url = self.speech_url(voice);

        tracing::debug!(
            model = %self.model_id,
            voice,
            input_len = request.input.len(),
            "ElevenLabs TTS request"
        );

        let body = ElevenLabsRequest {
            text: &request.input,
            model_id: &self.model_id,
            voice_settings: self.voice_settings,
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "ElevenLabs request failed");
                TtsError::ConnectionError(format!("Failed to send request to ElevenLabs: {e}"))
            })?;

        let status = response.status();

        if status != StatusCode::OK {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(%status, body = %error_text, "ElevenLabs TTS error");

            return Err(match status {
                StatusCode::UNAUTHORIZED => TtsError::AuthenticationFailed(error_text),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => TtsError::InvalidRequest(error_text),
                _ => TtsError::ProviderApiError {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "failed to read ElevenLabs response body");
            TtsError::ConnectionError(format!("Failed to read ElevenLabs audio: {e}"))
        })?;

        tracing::debug!(bytes = audio.len(), %content_type, "ElevenLabs TTS synthesis complete");

        Ok(SpeechResponse {
            audio: audio.to_vec(),
            content_type,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
