use serde::{Deserialize, Serialize};

/// A row from the title index, already joined to its document and site.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleRow {
    pub title: String,
    pub anchor: Option<String>,
    pub path: String,
    pub site: String,
    pub rank: f64,
}

/// A row from the term index, already joined to its document and site.
#[derive(Debug, Clone, PartialEq)]
pub struct TermRow {
    pub term: String,
    pub context: Option<String>,
    pub path: String,
    pub document_title: Option<String>,
    pub site: String,
    pub rank: f64,
}

/// A single search result as returned to callers.
///
/// `context` is only ever set for hits that came from the term index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub title: String,
    pub url: String,
    pub site: String,
    pub context: Option<String>,
    /// FTS5 rank of the source row; lower is a better match. Only
    /// comparable between hits from the same index.
    pub rank: f64,
}

/// Query string of `GET /api/search`.
///
/// Built from the raw key/value pairs so that a repeated `q` is not a
/// rejection: the first occurrence wins, as with `URLSearchParams.get`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value);
        Self { q }
    }
}

/// Search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Hit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    Available,
    Unavailable,
}

/// Health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: StoreStatus,
}
