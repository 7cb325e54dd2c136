use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use thiserror::Error;

use crate::types::{ErrorMessage, SummaryPayload};

pub type Result<T> = std::result::Result<T, ApiError>;

pub const NO_TEXT_FOUND: &str = "No text found in file.";
pub const PROCESSING_FAILED: &str = "An error occurred during processing.";
pub const BOOK_FETCH_FAILED: &str = "Failed to fetch book data.";
pub const BOOK_SUMMARY_FAILED: &str = "Failed to summarize the book.";
pub const SEARCH_FAILED: &str = "Failed to search books.";

/// Request-level failures, each with a fixed client-facing body
///
/// Summary endpoints answer `{"summary": ...}` even on failure; the search
/// endpoint answers `{"error": ...}`. Details are logged, never returned.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upload was readable but held no text
    #[error("no text found in upload")]
    NoTextFound,

    /// Upload could not be read or turned into text
    #[error("upload processing failed: {0}")]
    Processing(String),

    /// Upload request was malformed
    #[error("invalid upload: {message}")]
    InvalidUpload { status: StatusCode, message: String },

    /// Catalog refused the book key or answered with an error status
    #[error("book lookup failed: {0}")]
    BookFetch(String),

    /// Book lookup failed before a status was received, or the record was unreadable
    #[error("book summary failed: {0}")]
    BookSummary(String),

    /// Book summary request was malformed
    #[error("invalid book request: {0}")]
    InvalidBookRequest(String),

    /// Catalog search failed
    #[error("book search failed: {0}")]
    Search(String),

    /// Search request was malformed
    #[error("invalid search request: {0}")]
    InvalidSearch(String),
}

impl ApiError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NoTextFound | Self::BookFetch(_) | Self::InvalidBookRequest(_) | Self::InvalidSearch(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidUpload { status, .. } => *status,
            Self::Processing(_) | Self::BookSummary(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Search(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message that is safe to expose to API consumers
    pub fn client_message(&self) -> String {
        match self {
            Self::NoTextFound => NO_TEXT_FOUND.to_owned(),
            Self::Processing(_) => PROCESSING_FAILED.to_owned(),
            Self::BookFetch(_) => BOOK_FETCH_FAILED.to_owned(),
            Self::BookSummary(_) => BOOK_SUMMARY_FAILED.to_owned(),
            Self::Search(_) => SEARCH_FAILED.to_owned(),
            Self::InvalidUpload { message, .. } | Self::InvalidBookRequest(message) | Self::InvalidSearch(message) => {
                message.clone()
            }
        }
    }

    const fn is_search(&self) -> bool {
        matches!(self, Self::Search(_) | Self::InvalidSearch(_))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, %status, "request failed");
        } else {
            tracing::warn!(error = %self, %status, "request rejected");
        }

        let message = self.client_message();

        if self.is_search() {
            (status, Json(ErrorMessage { error: message })).into_response()
        } else {
            (status, Json(SummaryPayload::message(message))).into_response()
        }
    }
}
