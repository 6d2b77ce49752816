//! Asset photo entity model.

use assethub_core::types::{AssetId, PhotoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A photo owned by exactly one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AssetPhoto {
    /// Unique photo identifier.
    pub id: PhotoId,
    /// Owning asset.
    pub asset_id: AssetId,
    /// Path within the file store (e.g. `uploads/photos/AST-20250101-0001_1a2b3c4d.jpg`).
    pub file_path: String,
    /// When the photo was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

/// Data required to record a stored photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssetPhoto {
    /// Owning asset.
    pub asset_id: AssetId,
    /// Path within the file store.
    pub file_path: String,
    /// Upload timestamp.
    pub uploaded_at: DateTime<Utc>,
}
