//! Route definitions for the AssetHub HTTP layer.

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route.
///
/// Uploaded photos and QR images are served from the storage root under
/// `/static`, so a stored path `uploads/photos/x.png` is reachable at
/// `/static/uploads/photos/x.png`.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.storage.root_path);

    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/public/aset/{id}", get(handlers::public::asset_detail))
        .nest_service("/static", static_files)
        .with_state(state)
}
