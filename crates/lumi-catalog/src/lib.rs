#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Book search and description lookup against Open Library

mod error;
mod openlibrary;
mod types;

use async_trait::async_trait;

pub use error::{CatalogError, Result};
pub use openlibrary::OpenLibraryCatalog;
pub use types::{BookDetail, BookRecord, Description};

/// A searchable book catalog
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// Search by title, returning simplified records from the first result page
    async fn search(&self, title: &str) -> Result<Vec<BookRecord>>;

    /// Fetch the metadata record for a catalog key such as `/works/OL45804W`
    async fn work(&self, key: &str) -> Result<BookDetail>;
}
