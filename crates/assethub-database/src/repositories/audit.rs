//! Audit log repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgConnection;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::types::AssetId;
use assethub_core::types::time::utc_day_bounds;
use assethub_entity::audit::{AuditAction, AuditEntry, AuditFilter, CreateAuditEntry};

const COLUMNS: &str = "id, asset_id, actor_id, action, description, created_at";

/// Stateless repository for the `audit_log` table.
pub struct AuditRepository;

impl AuditRepository {
    /// Append an entry.
    pub async fn create(conn: &mut PgConnection, data: &CreateAuditEntry) -> AppResult<AuditEntry> {
        let query = format!(
            "INSERT INTO audit_log (asset_id, actor_id, action, description, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditEntry>(&query)
            .bind(data.asset_id)
            .bind(data.actor_id)
            .bind(data.action)
            .bind(&data.description)
            .bind(data.created_at)
            .fetch_one(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create audit entry", e)
            })
    }

    /// Delete all entries referencing an asset.
    pub async fn delete_by_asset(conn: &mut PgConnection, asset_id: AssetId) -> AppResult<u64> {
        sqlx::query("DELETE FROM audit_log WHERE asset_id = $1")
            .bind(asset_id)
            .execute(conn)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete audit entries", e)
            })
    }

    /// Search the log with filters, newest first.
    pub async fn search(conn: &mut PgConnection, filter: &AuditFilter) -> AppResult<Vec<AuditEntry>> {
        let day_bounds = filter.day.map(utc_day_bounds);

        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if filter.asset_id.is_some() {
            conditions.push(format!("asset_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.actor_id.is_some() {
            conditions.push(format!("actor_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.action.is_some() {
            conditions.push(format!("action = ${param_idx}"));
            param_idx += 1;
        }
        if day_bounds.is_some() {
            conditions.push(format!(
                "created_at >= ${param_idx} AND created_at < ${}",
                param_idx + 1
            ));
            param_idx += 2;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let limit_clause = if filter.limit.is_some() {
            format!("LIMIT ${param_idx}")
        } else {
            String::new()
        };
        let query = format!(
            "SELECT {COLUMNS} FROM audit_log {where_clause} \
             ORDER BY created_at DESC, id DESC {limit_clause}"
        );

        let mut select = sqlx::query_as::<_, AuditEntry>(&query);
        if let Some(asset_id) = filter.asset_id {
            select = select.bind(asset_id);
        }
        if let Some(actor_id) = filter.actor_id {
            select = select.bind(actor_id);
        }
        if let Some(action) = filter.action {
            select = select.bind(action);
        }
        if let Some((start, end)) = day_bounds {
            select = select.bind(start).bind(end);
        }
        if let Some(limit) = filter.limit {
            select = select.bind(limit.max(0));
        }

        select
            .fetch_all(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search audit log", e))
    }

    /// Distinct action tags present in the log.
    pub async fn distinct_actions(conn: &mut PgConnection) -> AppResult<Vec<AuditAction>> {
        sqlx::query_scalar::<_, AuditAction>(
            "SELECT DISTINCT action FROM audit_log ORDER BY action ASC",
        )
        .fetch_all(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list audit actions", e))
    }

    /// Count entries created in `[start, end)`.
    pub async fn count_between(
        conn: &mut PgConnection,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM audit_log WHERE created_at >= $1 AND created_at < $2",
        )
        .bind(start)
        .bind(end)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count audit entries", e))
    }
}
