//! Plain-text extraction for uploaded documents
//!
//! PDFs are detected by file extension and parsed with `pdf-extract`; any other
//! upload is treated as UTF-8 text.

use std::path::Path;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors raised while turning an upload into text
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The PDF could not be parsed
    #[error("failed to extract text from PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    /// A non-PDF upload was not valid UTF-8
    #[error("upload is not valid UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// How an upload is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    /// Classify by extension, ignoring case
    pub fn from_file_name(file_name: &str) -> Self {
        let is_pdf = Path::new(file_name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

        if is_pdf { Self::Pdf } else { Self::Text }
    }
}

/// Extract the text content of an upload
///
/// PDF pages are concatenated in document order with no separator.
/// This is CPU bound; async callers should run it on a blocking thread.
///
/// # Errors
///
/// Returns [`ExtractError::Pdf`] for unreadable PDFs and
/// [`ExtractError::InvalidUtf8`] for non-PDF uploads that are not UTF-8.
pub fn extract_text(bytes: Vec<u8>, file_name: &str) -> Result<String> {
    let kind = DocumentKind::from_file_name(file_name);

    tracing::debug!(file_name, ?kind, size = bytes.len(), "extracting text");

    match kind {
        DocumentKind::Pdf => {
            let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)?;
            tracing::debug!(file_name, pages = pages.len(), "extracted PDF pages");
            Ok(pages.concat())
        }
        DocumentKind::Text => Ok(String::from_utf8(bytes)?),
    }
}
