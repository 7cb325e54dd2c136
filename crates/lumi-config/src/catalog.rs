use serde::Deserialize;
use url::Url;

/// Open Library settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Catalog root; search and work lookups are resolved against it
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Maximum number of records returned by a title search
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_limit: default_search_limit(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("https://openlibrary.org").expect("valid default URL")
}

#[allow(clippy::missing_const_for_fn)]
fn default_search_limit() -> usize {
    10
}
