use base64::{Engine, engine::general_purpose::STANDARD};
use tts::SpeechRequest;

use crate::{state::AppState, types::SummaryPayload};

/// Summary text used when the summarizer fails
pub const SUMMARY_FALLBACK: &str = "Failed to summarize.";

/// Summarize `text` and voice the result
///
/// Never fails: a summarizer error yields [`SUMMARY_FALLBACK`] (which is still
/// voiced) and a speech error or empty audio body yields `audio: None`.
pub async fn summarize_and_speak(state: &AppState, text: &str, language: &str) -> SummaryPayload {
    let summary = match state.summarizer.summarize(text, language).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!(error = %e, language, "summarization failed, using fallback");
            SUMMARY_FALLBACK.to_owned()
        }
    };

    let audio = match state.speech.synthesize(SpeechRequest::new(summary.clone())).await {
        Ok(speech) if speech.audio.is_empty() => {
            tracing::warn!(provider = state.speech.name(), "speech synthesis returned no audio");
            None
        }
        Ok(speech) => {
            tracing::debug!(provider = state.speech.name(), bytes = speech.audio.len(), "summary voiced");
            Some(STANDARD.encode(&speech.audio))
        }
        Err(e) => {
            tracing::warn!(provider = state.speech.name(), error = %e, "speech synthesis failed");
            None
        }
    };

    SummaryPayload::Spoken { summary, audio }
}
