use serde::{Deserialize, Serialize};

/// Language used when a request does not name one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Body of every summary endpoint response
///
/// `Spoken` always carries the `audio` key (null when synthesis failed);
/// `Message` is used for errors and for books with no description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SummaryPayload {
    Spoken { summary: String, audio: Option<String> },
    Message { summary: String },
}

impl SummaryPayload {
    pub fn message(summary: impl Into<String>) -> Self {
        Self::Message { summary: summary.into() }
    }
}

/// Error body of the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMessage {
    pub error: String,
}

/// Query string of `GET /search_book`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: String,
}

/// Form body of `POST /summarize_book`
#[derive(Debug, Deserialize)]
pub struct BookSummaryForm {
    pub book_key: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// Resolve an optional language field, treating blank as absent
pub fn language_or_default(language: Option<String>) -> String {
    language
        .map(|l| l.trim().to_owned())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned())
}
