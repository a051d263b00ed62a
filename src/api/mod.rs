pub mod health;
pub mod search;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// All HTTP routes of the service.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(search::search))
        .route("/api/health", get(health::health))
        .with_state(state)
}
