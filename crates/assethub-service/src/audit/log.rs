//! Audit entry appender.

use assethub_core::result::AppResult;
use assethub_core::types::AssetId;
use assethub_database::StoreTransaction;
use assethub_entity::audit::{AuditAction, AuditEntry, CreateAuditEntry};

use crate::context::RequestContext;

/// Appends audit entries inside the caller's unit of work.
///
/// The entry commits or rolls back together with the change it describes.
pub struct AuditLog;

impl AuditLog {
    /// Append one entry attributed to the context's actor at the request time.
    pub async fn append(
        tx: &mut dyn StoreTransaction,
        ctx: &RequestContext,
        asset_id: Option<AssetId>,
        action: AuditAction,
        description: String,
    ) -> AppResult<AuditEntry> {
        tx.insert_audit_entry(&CreateAuditEntry {
            asset_id,
            actor_id: ctx.actor_id,
            action,
            description,
            created_at: ctx.request_time,
        })
        .await
    }
}
