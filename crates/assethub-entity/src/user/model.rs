//! User entity model.

use assethub_core::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::UserRole;

/// A staff member that can appear as the actor of audit entries.
///
/// Credentials live with the external session mechanism, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Role.
    pub role: UserRole,
    /// When the user was registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Role.
    pub role: UserRole,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}
