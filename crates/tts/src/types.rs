/// Text to synthesize
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub input: String,
    /// Voice identifier; the provider's configured voice when `None`
    pub voice: Option<String>,
}

impl SpeechRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            voice: None,
        }
    }

    #[must_use]
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }
}

/// Raw audio returned by a TTS provider
#[derive(Debug, Clone)]
pub struct SpeechResponse {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}
