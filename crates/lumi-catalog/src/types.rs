use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Author reported when a search result lists none
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Simplified search result returned to clients
///
/// Fields are passed through as Open Library sent them, so one oddly typed
/// document cannot fail a whole page of results. Missing fields are `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: Value,
    pub author: Value,
    pub key: Value,
    pub cover_i: Value,
}

/// `search.json` response, reduced to the fields we read
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub docs: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchDoc {
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub author_name: Value,
    #[serde(default)]
    pub key: Value,
    #[serde(default)]
    pub cover_i: Value,
}

impl From<SearchDoc> for BookRecord {
    fn from(doc: SearchDoc) -> Self {
        let author = match doc.author_name {
            Value::Array(names) => names.into_iter().next(),
            _ => None,
        }
        .unwrap_or_else(|| Value::from(UNKNOWN_AUTHOR));

        Self {
            title: doc.title,
            author,
            key: doc.key,
            cover_i: doc.cover_i,
        }
    }
}

/// Per-work metadata record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookDetail {
    #[serde(default)]
    pub description: Option<Description>,
}

impl BookDetail {
    /// Description text, empty when the record has none
    pub fn description_text(&self) -> &str {
        match &self.description {
            Some(Description::Text(text) | Description::Typed { value: text }) => text,
            None => "",
        }
    }
}

/// Open Library stores descriptions either as a plain string or as
/// `{"type": "/type/text", "value": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Typed {
        #[serde(default)]
        value: String,
    },
}
