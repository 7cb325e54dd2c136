pub mod elevenlabs;

use async_trait::async_trait;

use crate::types::{SpeechRequest, SpeechResponse};

/// A speech backend that voices summary text
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Synthesize `request.input` with the requested or default voice
    async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse>;

    /// Short name used in logs
    fn name(&self) -> &str;
}
