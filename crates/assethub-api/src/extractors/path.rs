//! Typed path parameter helpers.

use assethub_core::error::AppError;
use assethub_core::types::AssetId;

/// Parses an asset id from a path segment.
pub fn parse_asset_id(s: &str) -> Result<AssetId, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("ID aset tidak valid: {s}")))
}
