//! QR code repository implementation.

use sqlx::PgConnection;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::types::{AssetId, QrCodeId};
use assethub_entity::qr::{CreateQrCode, QrCode};

const COLUMNS: &str = "id, asset_id, file_path, qr_value, generated_at";

/// Stateless repository for the `qr_codes` table.
pub struct QrCodeRepository;

impl QrCodeRepository {
    /// Record a generated QR image.
    pub async fn create(conn: &mut PgConnection, data: &CreateQrCode) -> AppResult<QrCode> {
        let query = format!(
            "INSERT INTO qr_codes (asset_id, file_path, qr_value, generated_at) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QrCode>(&query)
            .bind(data.asset_id)
            .bind(&data.file_path)
            .bind(&data.qr_value)
            .bind(data.generated_at)
            .fetch_one(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create QR code", e))
    }

    /// List the QR codes of an asset, newest first.
    pub async fn find_by_asset(conn: &mut PgConnection, asset_id: AssetId) -> AppResult<Vec<QrCode>> {
        let query = format!(
            "SELECT {COLUMNS} FROM qr_codes WHERE asset_id = $1 ORDER BY generated_at DESC, id DESC"
        );
        sqlx::query_as::<_, QrCode>(&query)
            .bind(asset_id)
            .fetch_all(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list QR codes", e))
    }

    /// Delete a QR code row.
    pub async fn delete(conn: &mut PgConnection, id: QrCodeId) -> AppResult<()> {
        sqlx::query("DELETE FROM qr_codes WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete QR code", e)
            })?;
        Ok(())
    }

    /// Count all QR codes.
    pub async fn count(conn: &mut PgConnection) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM qr_codes")
            .fetch_one(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count QR codes", e))
    }
}
