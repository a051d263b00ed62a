use axum::extract::State;
use axum::Json;

use crate::models::{HealthResponse, StoreStatus};
use crate::state::AppState;

/// GET /api/health - Liveness plus whether the index store can be opened.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store.clone();
    let available = tokio::task::spawn_blocking(move || store.is_available())
        .await
        .unwrap_or(false);

    Json(HealthResponse {
        status: "ok".to_string(),
        store: if available {
            StoreStatus::Available
        } else {
            StoreStatus::Unavailable
        },
    })
}
