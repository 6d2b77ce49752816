//! Asset repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgConnection;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::types::AssetId;
use assethub_entity::asset::{Asset, AssetFilter, CreateAsset, UpdateAsset};

use super::map_write_error;

/// Column list for the `assets` table.
const COLUMNS: &str = "id, asset_code, name, category_id, location_id, condition, \
    description, created_at, updated_at";

/// Stateless repository for the `assets` table.
pub struct AssetRepository;

impl AssetRepository {
    /// Insert a new asset.
    pub async fn create(conn: &mut PgConnection, data: &CreateAsset) -> AppResult<Asset> {
        let query = format!(
            "INSERT INTO assets \
                (asset_code, name, category_id, location_id, condition, description, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&data.asset_code)
            .bind(&data.name)
            .bind(data.category_id)
            .bind(data.location_id)
            .bind(&data.condition)
            .bind(&data.description)
            .bind(data.created_at)
            .fetch_one(conn)
            .await
            .map_err(|e| map_write_error(e, "Failed to create asset"))
    }

    /// Find an asset by ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: AssetId) -> AppResult<Option<Asset>> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find asset", e))
    }

    /// Check whether an asset code is taken.
    pub async fn code_exists(conn: &mut PgConnection, code: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM assets WHERE asset_code = $1)")
            .bind(code)
            .fetch_one(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check asset code", e)
            })
    }

    /// Count assets created in `[start, end)`.
    pub async fn count_created_between(
        conn: &mut PgConnection,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM assets WHERE created_at >= $1 AND created_at < $2",
        )
        .bind(start)
        .bind(end)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count assets", e))
    }

    /// Overwrite the mutable fields of an asset.
    pub async fn update(
        conn: &mut PgConnection,
        id: AssetId,
        data: &UpdateAsset,
    ) -> AppResult<Asset> {
        let query = format!(
            "UPDATE assets SET name = $2, category_id = $3, location_id = $4, \
                condition = $5, description = $6, updated_at = $7 \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(&data.name)
            .bind(data.category_id)
            .bind(data.location_id)
            .bind(&data.condition)
            .bind(&data.description)
            .bind(data.updated_at)
            .fetch_optional(conn)
            .await
            .map_err(|e| map_write_error(e, "Failed to update asset"))?
            .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))
    }

    /// Delete an asset row.
    pub async fn delete(conn: &mut PgConnection, id: AssetId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete asset", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Asset {id} not found")));
        }
        Ok(())
    }

    /// List assets matching the filter, newest first.
    pub async fn list(conn: &mut PgConnection, filter: &AssetFilter) -> AppResult<Vec<Asset>> {
        let search = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(s)));

        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if filter.category_id.is_some() {
            conditions.push(format!("category_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.location_id.is_some() {
            conditions.push(format!("location_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.condition.is_some() {
            conditions.push(format!("condition = ${param_idx}"));
            param_idx += 1;
        }
        if search.is_some() {
            conditions.push(format!(
                "(name ILIKE ${param_idx} ESCAPE '\\' OR asset_code ILIKE ${param_idx} ESCAPE '\\')"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query =
            format!("SELECT {COLUMNS} FROM assets {where_clause} ORDER BY created_at DESC, id DESC");

        let mut select = sqlx::query_as::<_, Asset>(&query);
        if let Some(category_id) = filter.category_id {
            select = select.bind(category_id);
        }
        if let Some(location_id) = filter.location_id {
            select = select.bind(location_id);
        }
        if let Some(condition) = &filter.condition {
            select = select.bind(condition);
        }
        if let Some(pattern) = search {
            select = select.bind(pattern);
        }

        select
            .fetch_all(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list assets", e))
    }

    /// Count all assets.
    pub async fn count(conn: &mut PgConnection) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM assets")
            .fetch_one(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count assets", e))
    }
}

/// Escape LIKE wildcards in user-supplied search text.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
