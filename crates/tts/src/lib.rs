#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod provider;
mod types;

pub use error::{Result, TtsError};
pub use provider::{TtsProvider, elevenlabs::ElevenLabsProvider};
pub use types::{SpeechRequest, SpeechResponse};
