//! Catalog entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named entry in either the `categories` or `locations` table.
///
/// Both tables share this shape; the owning table is implied by the
/// [`CatalogKind`](super::CatalogKind) the entry was loaded with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CatalogEntry {
    /// Row identifier within its table.
    pub id: i64,
    /// Unique display name (case-sensitive).
    pub name: String,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last renamed.
    pub updated_at: DateTime<Utc>,
}
