use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Speech synthesis errors
#[derive(Debug, Error)]
pub enum TtsError {
    /// Provider rejected the API key
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider rejected the request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider answered with anything other than 200
    #[error("provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network or connection error
    #[error("connection error: {0}")]
    ConnectionError(String),
}
