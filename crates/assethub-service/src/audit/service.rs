//! Audit log queries.

use std::sync::Arc;

use assethub_core::result::AppResult;
use assethub_core::types::AssetId;
use assethub_database::AssetStore;
use assethub_entity::audit::{AuditAction, AuditEntry, AuditFilter};

/// Read side of the audit log.
#[derive(Debug, Clone)]
pub struct AuditService {
    store: Arc<dyn AssetStore>,
}

impl AuditService {
    /// Creates a new audit service.
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    /// History of one asset, newest first.
    pub async fn history_for_asset(&self, asset_id: AssetId) -> AppResult<Vec<AuditEntry>> {
        self.search(&AuditFilter {
            asset_id: Some(asset_id),
            ..Default::default()
        })
        .await
    }

    /// The most recent entries across the whole log.
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<AuditEntry>> {
        self.search(&AuditFilter {
            limit: Some(limit),
            ..Default::default()
        })
        .await
    }

    /// Entries matching a filter, newest first.
    pub async fn search(&self, filter: &AuditFilter) -> AppResult<Vec<AuditEntry>> {
        let mut tx = self.store.begin().await?;
        tx.search_audit_entries(filter).await
    }

    /// Action tags present in the log, for building filter menus.
    pub async fn actions(&self) -> AppResult<Vec<AuditAction>> {
        let mut tx = self.store.begin().await?;
        tx.distinct_audit_actions().await
    }
}
