use std::fmt;
use std::path::PathBuf;

/// Which of the two full-text indices a row or failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Title,
    Term,
}

impl Stream {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::Title => "title",
            Stream::Term => "term",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Internal failure modes of a search.
///
/// None of these ever reach an HTTP caller: the aggregator degrades each
/// one to "no results" and reports it to the log instead.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("index store at {} is unavailable: {reason}", path.display())]
    StoreUnavailable { path: PathBuf, reason: String },

    #[error("{stream} index query failed: {source}")]
    QueryFailure {
        stream: Stream,
        #[source]
        source: rusqlite::Error,
    },
}

impl SearchError {
    pub fn query_failure(stream: Stream) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| SearchError::QueryFailure { stream, source }
    }

    /// The index a failure belongs to, if it is specific to one.
    pub fn stream(&self) -> Option<Stream> {
        match self {
            SearchError::QueryFailure { stream, .. } => Some(*stream),
            _ => None,
        }
    }
}
