use thiserror::Error;

pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Reasons a summarization call produced no summary
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Network or connection error
    #[error("connection error: {0}")]
    Connection(String),

    /// Provider answered with a non-success status
    #[error("provider API error ({status}): {message}")]
    ProviderApi { status: u16, message: String },

    /// Body was not a `generateContent` response
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// Response contained no candidate text
    #[error("provider returned no summary text")]
    EmptyResponse,
}
