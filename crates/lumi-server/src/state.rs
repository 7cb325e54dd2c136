use std::sync::Arc;

use lumi_catalog::{BookCatalog, OpenLibraryCatalog};
use lumi_config::Config;
use lumi_summarize::{GeminiSummarizer, Summarizer};
use tts::{ElevenLabsProvider, TtsProvider};

use crate::http_client::http_client;

/// Upstream providers shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<dyn Summarizer>,
    pub speech: Arc<dyn TtsProvider>,
    pub catalog: Arc<dyn BookCatalog>,
}

impl AppState {
    pub fn new(
        summarizer: Arc<dyn Summarizer>,
        speech: Arc<dyn TtsProvider>,
        catalog: Arc<dyn BookCatalog>,
    ) -> Self {
        Self {
            summarizer,
            speech,
            catalog,
        }
    }

    /// Build the production providers over one shared HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream HTTP client cannot be built
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = http_client(&config.upstream)?;

        let summarizer = GeminiSummarizer::new(client.clone(), &config.summarizer);
        let speech = ElevenLabsProvider::new(client.clone(), &config.speech);
        let catalog = OpenLibraryCatalog::new(client, &config.catalog);

        tracing::debug!(
            model = %config.summarizer.model,
            speech = speech.name(),
            catalog = %config.catalog.base_url,
            "upstream providers configured"
        );

        Ok(Self::new(Arc::new(summarizer), Arc::new(speech), Arc::new(catalog)))
    }
}
