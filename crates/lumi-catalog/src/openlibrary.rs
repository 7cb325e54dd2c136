use async_trait::async_trait;
use lumi_config::CatalogConfig;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    BookCatalog,
    error::{CatalogError, Result},
    types::{BookDetail, BookRecord, SearchResponse},
};

/// Open Library catalog client
pub struct OpenLibraryCatalog {
    client: Client,
    base_url: Url,
    search_limit: usize,
}

impl OpenLibraryCatalog {
    pub fn new(client: Client, config: &CatalogConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            search_limit: config.search_limit,
        }
    }

    fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn search_url(&self) -> String {
        format!("{}/search.json", self.base())
    }

    /// Keys are absolute catalog paths, so the host can never change
    fn work_url(&self, key: &str) -> Result<String> {
        if !key.starts_with('/') || key.contains(['?', '#']) || key.chars().any(char::is_whitespace) {
            return Err(CatalogError::InvalidKey(key.to_owned()));
        }

        Ok(format!("{}{key}.json", self.base()))
    }

    async fn get_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, "catalog request failed");
            CatalogError::Connection(e.to_string())
        })?;

        let response = check_status(response).await?;

        let raw = response
            .text()
            .await
            .map_err(|e| CatalogError::Connection(e.to_string()))?;

        serde_json::from_str(&raw).map_err(|e| {
            tracing::error!(error = %e, "unexpected catalog response shape");
            CatalogError::MalformedResponse(e.to_string())
        })
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    tracing::warn!(%status, body = %message, "catalog returned error status");

    Err(CatalogError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl BookCatalog for OpenLibraryCatalog {
    async fn search(&self, title: &str) -> Result<Vec<BookRecord>> {
        tracing::debug!(title, "catalog search");

        let request = self.client.get(self.search_url()).query(&[("title", title)]);
        let response: SearchResponse = self.get_json(request).await?;

        let records: Vec<BookRecord> = response
            .docs
            .into_iter()
            .take(self.search_limit)
            .map(BookRecord::from)
            .collect();

        tracing::debug!(title, results = records.len(), "catalog search complete");

        Ok(records)
    }

    async fn work(&self, key: &str) -> Result<BookDetail> {
        let url = self.work_url(key)?;

        tracing::debug!(key, "catalog work lookup");

        self.get_json(self.client.get(url)).await
    }
}
