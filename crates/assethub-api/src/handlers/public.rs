//! Unauthenticated asset page reached by scanning a QR code.

use axum::Json;
use axum::extract::{Path, State};

use assethub_service::AssetDetail;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::path::parse_asset_id;
use crate::state::AppState;

/// GET /public/aset/{id}
pub async fn asset_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<AssetDetail>>, ApiError> {
    let asset_id = parse_asset_id(&id)?;
    let detail = state.services.assets.detail(asset_id).await?;
    Ok(Json(ApiResponse::ok(detail)))
}
