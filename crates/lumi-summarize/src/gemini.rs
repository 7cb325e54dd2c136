use async_trait::async_trait;
use lumi_config::SummarizerConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    Summarizer, build_prompt,
    error::{Result, SummarizeError},
    protocol::{GenerateContentRequest, GenerateContentResponse},
};

/// Gemini summarization client
pub struct GeminiSummarizer {
    client: Client,
    base_url: Url,
    model: String,
    api_key: SecretString,
}

impl GeminiSummarizer {
    pub fn new(client: Client, config: &SummarizerConfig) -> Self {
        // Accept both "gemini-2.5-pro" and "models/gemini-2.5-pro"
        let model = config.model.trim_start_matches("models/").to_owned();

        Self {
            client,
            base_url: config.base_url.clone(),
            model,
            api_key: config.api_key.clone(),
        }
    }

    /// Build the `generateContent` endpoint URL for the configured model
    fn generate_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/models/{}:generateContent", self.model)
    }
}

#[async_trait]
impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, text: &str, language: &str) -> Result<String> {
        let body = GenerateContentRequest::single_turn(build_prompt(text, language));

        tracing::debug!(model = %self.model, language, input_len = text.len(), "Gemini summarize request");

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Gemini request failed");
                SummarizeError::Connection(e.to_string())
            })?;

        let status = response.status();
        let raw = response.text().await.map_err(|e| {
            tracing::error!(error = %e, "failed to read Gemini response body");
            SummarizeError::Connection(e.to_string())
        })?;

        if !status.is_success() {
            tracing::error!(%status, body = %raw, "Gemini response error");
            return Err(SummarizeError::ProviderApi {
                status: status.as_u16(),
                message: raw,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!(error = %e, body = %raw, "Gemini response error");
            SummarizeError::MalformedResponse(e.to_string())
        })?;

        let Some(summary) = parsed.first_text() else {
            tracing::error!(body = %raw, "Gemini response error: no candidate text");
            return Err(SummarizeError::EmptyResponse);
        };

        if let Some(usage) = &parsed.usage_metadata {
            tracing::debug!(
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                finish_reason = parsed.candidates.first().and_then(|c| c.finish_reason.as_deref()),
                "Gemini summarize complete"
            );
        }

        Ok(summary.to_owned())
    }
}
