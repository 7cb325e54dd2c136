#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Text summarization through the Gemini `generateContent` API

mod error;
mod gemini;
mod protocol;

use async_trait::async_trait;

pub use error::{Result, SummarizeError};
pub use gemini::GeminiSummarizer;

/// Something that can condense text into a short narrative
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text`, writing the summary in `language`
    async fn summarize(&self, text: &str, language: &str) -> Result<String>;
}

/// Single-turn instruction sent to the model
pub fn build_prompt(text: &str, language: &str) -> String {
    format!("Summarize this story in {language}:\n{text}")
}
