//! Health check handler.

use axum::Json;
use axum::extract::State;

use assethub_core::traits::storage::StorageProvider;
use assethub_database::AssetStore;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let store = &state.services.store;
    let database_ok = store.health_check().await.unwrap_or(false);
    let storage_ok = state.services.provider.health_check().await.unwrap_or(false);

    Json(ApiResponse::ok(HealthResponse {
        status: if database_ok && storage_ok { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: store.backend().to_string(),
        database_ok,
        storage_ok,
    }))
}
