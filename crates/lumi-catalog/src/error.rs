use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog lookup errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Key is not a catalog path
    #[error("invalid catalog key: {0:?}")]
    InvalidKey(String),

    /// Catalog answered with a non-success status
    #[error("catalog returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Network or connection error
    #[error("connection error: {0}")]
    Connection(String),

    /// Body did not match the expected shape
    #[error("malformed catalog response: {0}")]
    MalformedResponse(String),
}
