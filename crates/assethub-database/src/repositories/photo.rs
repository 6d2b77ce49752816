//! Asset photo repository implementation.

use sqlx::PgConnection;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::types::{AssetId, PhotoId};
use assethub_entity::photo::{AssetPhoto, CreateAssetPhoto};

const COLUMNS: &str = "id, asset_id, file_path, uploaded_at";

/// Stateless repository for the `asset_photos` table.
pub struct PhotoRepository;

impl PhotoRepository {
    /// Record a stored photo.
    pub async fn create(conn: &mut PgConnection, data: &CreateAssetPhoto) -> AppResult<AssetPhoto> {
        let query = format!(
            "INSERT INTO asset_photos (asset_id, file_path, uploaded_at) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetPhoto>(&query)
            .bind(data.asset_id)
            .bind(&data.file_path)
            .bind(data.uploaded_at)
            .fetch_one(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create photo", e))
    }

    /// Find a photo by ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: PhotoId) -> AppResult<Option<AssetPhoto>> {
        let query = format!("SELECT {COLUMNS} FROM asset_photos WHERE id = $1");
        sqlx::query_as::<_, AssetPhoto>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find photo", e))
    }

    /// List the photos of an asset in upload order.
    pub async fn find_by_asset(
        conn: &mut PgConnection,
        asset_id: AssetId,
    ) -> AppResult<Vec<AssetPhoto>> {
        let query = format!(
            "SELECT {COLUMNS} FROM asset_photos WHERE asset_id = $1 ORDER BY uploaded_at ASC, id ASC"
        );
        sqlx::query_as::<_, AssetPhoto>(&query)
            .bind(asset_id)
            .fetch_all(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list photos", e))
    }

    /// Delete a photo row.
    pub async fn delete(conn: &mut PgConnection, id: PhotoId) -> AppResult<()> {
        sqlx::query("DELETE FROM asset_photos WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete photo", e))?;
        Ok(())
    }
}
