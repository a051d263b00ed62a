use std::sync::Arc;

use crate::error::SearchError;
use crate::models::Hit;
use crate::search::merge::merge_streams;
use crate::search::query::SanitizedQuery;
use crate::search::routes::SiteRoutes;
use crate::search::store::IndexReader;

/// Outcome of one search that reached the index store.
///
/// `failures` holds the per-index errors that were degraded to zero rows;
/// `hits` is still valid when it is non-empty.
#[derive(Debug)]
pub struct SearchReport {
    pub query: String,
    pub hits: Vec<Hit>,
    pub failures: Vec<SearchError>,
}

/// Single entry point for searching both documentation indices.
pub struct SearchAggregator {
    reader: Arc<dyn IndexReader>,
    routes: SiteRoutes,
}

impl SearchAggregator {
    pub fn new(reader: Arc<dyn IndexReader>, routes: SiteRoutes) -> Self {
        Self { reader, routes }
    }

    /// Search titles then terms and merge them.
    ///
    /// Never fails and never panics on store problems: blank queries, an
    /// unavailable store, and index errors all yield fewer (or no) hits and
    /// are reported through `tracing` instead.
    pub fn search(&self, raw_query: &str) -> Vec<Hit> {
        let query = match SanitizedQuery::new(raw_query) {
            Ok(query) => query,
            Err(e) => {
                tracing::debug!("Search skipped: {e}");
                return Vec::new();
            }
        };

        tracing::info!(query = query.text(), "Search started");

        match self.run(&query) {
            Ok(report) => {
                for failure in &report.failures {
                    tracing::error!(
                        query = %report.query,
                        stream = failure.stream().map(|s| s.as_str()),
                        error = %failure,
                        "Index query failed"
                    );
                }
                tracing::info!(
                    query = %report.query,
                    result_count = report.hits.len(),
                    "Search completed"
                );
                report.hits
            }
            Err(e) => {
                // The store logs its own unavailability once per outage.
                tracing::debug!(query = query.text(), "Search returned nothing: {e}");
                Vec::new()
            }
        }
    }

    /// Query both indices and merge the rows, keeping failures explicit.
    ///
    /// Only [`SearchError::StoreUnavailable`] aborts the whole search; a
    /// failed index query contributes no rows and is recorded in the report.
    pub fn run(&self, query: &SanitizedQuery) -> Result<SearchReport, SearchError> {
        let mut failures = Vec::new();

        let titles = match self.reader.title_rows(query.phrase()) {
            Ok(rows) => rows,
            Err(e @ SearchError::StoreUnavailable { .. }) => return Err(e),
            Err(e) => {
                failures.push(e);
                Vec::new()
            }
        };

        let terms = match self.reader.term_rows(query.phrase()) {
            Ok(rows) => rows,
            Err(e @ SearchError::StoreUnavailable { .. }) => return Err(e),
            Err(e) => {
                failures.push(e);
                Vec::new()
            }
        };

        Ok(SearchReport {
            query: query.text().to_string(),
            hits: merge_streams(&self.routes, &titles, &terms),
            failures,
        })
    }
}
