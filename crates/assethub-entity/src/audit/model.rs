//! Audit log entry entity model.

use assethub_core::types::{AssetId, AuditEntryId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::AuditAction;

/// An immutable audit log entry recording one state-changing action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AuditEntry {
    /// Unique audit entry identifier.
    pub id: AuditEntryId,
    /// The asset the action concerned, if any.
    pub asset_id: Option<AssetId>,
    /// The user who performed the action.
    pub actor_id: UserId,
    /// The action that was performed.
    pub action: AuditAction,
    /// Human-readable (Indonesian) description of the change.
    pub description: String,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
}

/// Data required to append an audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuditEntry {
    /// The asset concerned, if any.
    pub asset_id: Option<AssetId>,
    /// The acting user.
    pub actor_id: UserId,
    /// The action performed.
    pub action: AuditAction,
    /// Human-readable description.
    pub description: String,
    /// Timestamp of the action.
    pub created_at: DateTime<Utc>,
}

/// Criteria for querying the audit log. Results are always newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditFilter {
    /// Only entries about this asset.
    pub asset_id: Option<AssetId>,
    /// Only entries by this actor.
    pub actor_id: Option<UserId>,
    /// Only entries with this action tag.
    pub action: Option<AuditAction>,
    /// Only entries created on this UTC calendar day.
    pub day: Option<NaiveDate>,
    /// Maximum number of entries to return.
    pub limit: Option<i64>,
}

impl AuditFilter {
    /// Check whether an entry satisfies every criterion (the limit aside).
    pub fn matches(&self, entry: &AuditEntry) -> bool {
        self.asset_id.is_none_or(|id| entry.asset_id == Some(id))
            && self.actor_id.is_none_or(|id| entry.actor_id == id)
            && self.action.is_none_or(|action| entry.action == action)
            && self
                .day
                .is_none_or(|day| entry.created_at.date_naive() == day)
    }
}
