//! User service: the registry of actors referenced by audit entries.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_database::AssetStore;
use assethub_entity::user::{CreateUser, User, UserRole};

/// Username of the administrator created on first start.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Registers and resolves users.
#[derive(Debug, Clone)]
pub struct UserService {
    store: Arc<dyn AssetStore>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    /// Register a new user.
    pub async fn register(
        &self,
        username: &str,
        full_name: &str,
        role: UserRole,
    ) -> AppResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username tidak boleh kosong"));
        }

        let mut tx = self.store.begin().await?;
        let user = tx
            .insert_user(&CreateUser {
                username: username.to_string(),
                full_name: full_name.trim().to_string(),
                role,
                created_at: Utc::now(),
            })
            .await
            .map_err(|e| {
                if e.is_storage_conflict() {
                    AppError::conflict("Username sudah digunakan")
                } else {
                    e
                }
            })?;
        tx.commit().await?;

        info!(user_id = %user.id, username = %user.username, role = %user.role, "User registered");
        Ok(user)
    }

    /// Look up a user by username.
    pub async fn resolve(&self, username: &str) -> AppResult<User> {
        let mut tx = self.store.begin().await?;
        tx.find_user_by_username(username.trim())
            .await?
            .ok_or_else(|| AppError::not_found("Pengguna tidak ditemukan"))
    }

    /// Return the default administrator, creating it if missing.
    pub async fn ensure_default_admin(&self) -> AppResult<User> {
        {
            let mut tx = self.store.begin().await?;
            if let Some(admin) = tx.find_user_by_username(DEFAULT_ADMIN_USERNAME).await? {
                return Ok(admin);
            }
        }

        match self
            .register(DEFAULT_ADMIN_USERNAME, "Administrator", UserRole::Admin)
            .await
        {
            Err(e) if e.kind == ErrorKind::Conflict => {
                self.resolve(DEFAULT_ADMIN_USERNAME).await
            }
            result => result,
        }
    }

    /// List all users ordered by username.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let mut tx = self.store.begin().await?;
        tx.list_users().await
    }
}
