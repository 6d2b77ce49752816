//! Category and location repository implementation.
//!
//! Both vocabularies live in identically shaped tables, so one repository
//! serves both; the table name comes from [`CatalogKind::table`].

use chrono::{DateTime, Utc};
use sqlx::PgConnection;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_entity::catalog::{CatalogEntry, CatalogKind, CatalogRef};

use super::map_write_error;

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Stateless repository for the `categories` and `locations` tables.
pub struct CatalogRepository;

impl CatalogRepository {
    /// Insert a new entry.
    pub async fn create(
        conn: &mut PgConnection,
        kind: CatalogKind,
        name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<CatalogEntry> {
        let query = format!(
            "INSERT INTO {} (name, created_at, updated_at) VALUES ($1, $2, $2) RETURNING {COLUMNS}",
            kind.table()
        );
        sqlx::query_as::<_, CatalogEntry>(&query)
            .bind(name)
            .bind(now)
            .fetch_one(conn)
            .await
            .map_err(|e| map_write_error(e, &format!("Failed to create {kind}")))
    }

    /// Find an entry by reference.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        entry: CatalogRef,
    ) -> AppResult<Option<CatalogEntry>> {
        let kind = entry.kind();
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", kind.table());
        sqlx::query_as::<_, CatalogEntry>(&query)
            .bind(entry.id())
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, format!("Failed to find {kind}"), e))
    }

    /// Find an entry by exact name.
    pub async fn find_by_name(
        conn: &mut PgConnection,
        kind: CatalogKind,
        name: &str,
    ) -> AppResult<Option<CatalogEntry>> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE name = $1", kind.table());
        sqlx::query_as::<_, CatalogEntry>(&query)
            .bind(name)
            .fetch_optional(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to find {kind} by name"), e)
            })
    }

    /// Rename an entry.
    pub async fn rename(
        conn: &mut PgConnection,
        entry: CatalogRef,
        name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<CatalogEntry> {
        let kind = entry.kind();
        let query = format!(
            "UPDATE {} SET name = $2, updated_at = $3 WHERE id = $1 RETURNING {COLUMNS}",
            kind.table()
        );
        sqlx::query_as::<_, CatalogEntry>(&query)
            .bind(entry.id())
            .bind(name)
            .bind(now)
            .fetch_optional(conn)
            .await
            .map_err(|e| map_write_error(e, &format!("Failed to rename {kind}")))?
            .ok_or_else(|| AppError::not_found(format!("{kind} {} not found", entry.id())))
    }

    /// Delete an entry.
    pub async fn delete(conn: &mut PgConnection, entry: CatalogRef) -> AppResult<()> {
        let kind = entry.kind();
        let query = format!("DELETE FROM {} WHERE id = $1", kind.table());
        sqlx::query(&query)
            .bind(entry.id())
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to delete {kind}"), e)
            })?;
        Ok(())
    }

    /// List all entries of a vocabulary by name.
    pub async fn list(conn: &mut PgConnection, kind: CatalogKind) -> AppResult<Vec<CatalogEntry>> {
        let query = format!("SELECT {COLUMNS} FROM {} ORDER BY name ASC", kind.table());
        sqlx::query_as::<_, CatalogEntry>(&query)
            .fetch_all(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, format!("Failed to list {kind}"), e))
    }

    /// Count assets referencing an entry.
    pub async fn count_referencing_assets(
        conn: &mut PgConnection,
        entry: CatalogRef,
    ) -> AppResult<i64> {
        let query = format!(
            "SELECT COUNT(*) FROM assets WHERE {} = $1",
            entry.kind().asset_column()
        );
        sqlx::query_scalar::<_, i64>(&query)
            .bind(entry.id())
            .fetch_one(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count referencing assets", e)
            })
    }

    /// Count entries of a vocabulary.
    pub async fn count(conn: &mut PgConnection, kind: CatalogKind) -> AppResult<i64> {
        let query = format!("SELECT COUNT(*) FROM {}", kind.table());
        sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to count {kind}"), e)
            })
    }
}
