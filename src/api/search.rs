use axum::extract::{Query, State};
use axum::Json;

use crate::models::{SearchParams, SearchResponse};
use crate::state::AppState;

/// GET /api/search?q=... - Title hits first, then term hits.
///
/// Always answers 200. A missing or blank `q` is answered without touching
/// the index store, and any store problem shows up only as fewer results.
pub async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<SearchResponse> {
    let params = SearchParams::from_pairs(pairs);
    let query = params.q.as_deref().unwrap_or_default().trim().to_string();
    if query.is_empty() {
        return Json(SearchResponse { results: vec![] });
    }

    let search = state.search.clone();
    let results = match tokio::task::spawn_blocking(move || search.search(&query)).await {
        Ok(hits) => hits,
        Err(e) => {
            tracing::error!("Search task failed: {e}");
            Vec::new()
        }
    };

    Json(SearchResponse { results })
}
