//! User repository implementation.

use sqlx::PgConnection;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::types::UserId;
use assethub_entity::user::{CreateUser, User};

use super::map_write_error;

const COLUMNS: &str = "id, username, full_name, role, created_at";

/// Stateless repository for the `users` table.
pub struct UserRepository;

impl UserRepository {
    /// Insert a user.
    pub async fn create(conn: &mut PgConnection, data: &CreateUser) -> AppResult<User> {
        let query = format!(
            "INSERT INTO users (username, full_name, role, created_at) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&data.username)
            .bind(&data.full_name)
            .bind(data.role)
            .bind(data.created_at)
            .fetch_one(conn)
            .await
            .map_err(|e| map_write_error(e, "Failed to create user"))
    }

    /// Find a user by ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: UserId) -> AppResult<Option<User>> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    /// Find a user by username.
    pub async fn find_by_username(
        conn: &mut PgConnection,
        username: &str,
    ) -> AppResult<Option<User>> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    /// List all users.
    pub async fn list(conn: &mut PgConnection) -> AppResult<Vec<User>> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY username ASC");
        sqlx::query_as::<_, User>(&query)
            .fetch_all(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }
}
