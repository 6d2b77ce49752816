//! Dashboard statistics.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use assethub_core::result::AppResult;
use assethub_core::types::time::utc_day_bounds;
use assethub_database::AssetStore;
use assethub_entity::audit::{AuditEntry, AuditFilter};
use assethub_entity::catalog::CatalogKind;

/// Number of audit entries shown as recent activity.
pub const RECENT_ACTIVITY_LIMIT: i64 = 10;

/// Counters and recent activity shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_assets: i64,
    pub total_categories: i64,
    pub total_locations: i64,
    pub total_qr_codes: i64,
    /// Audit entries recorded on the current UTC day.
    pub today_activity: i64,
    /// Most recent audit entries, newest first.
    pub recent_activity: Vec<AuditEntry>,
}

/// Builds dashboard statistics.
#[derive(Debug, Clone)]
pub struct DashboardService {
    store: Arc<dyn AssetStore>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    /// Collect statistics as of `now`.
    pub async fn stats(&self, now: DateTime<Utc>) -> AppResult<DashboardStats> {
        let mut tx = self.store.begin().await?;
        let (start, end) = utc_day_bounds(now.date_naive());

        Ok(DashboardStats {
            total_assets: tx.count_assets().await?,
            total_categories: tx.count_catalog_entries(CatalogKind::Category).await?,
            total_locations: tx.count_catalog_entries(CatalogKind::Location).await?,
            total_qr_codes: tx.count_qr_codes().await?,
            today_activity: tx.count_audit_entries_between(start, end).await?,
            recent_activity: tx
                .search_audit_entries(&AuditFilter {
                    limit: Some(RECENT_ACTIVITY_LIMIT),
                    ..Default::default()
                })
                .await?,
        })
    }
}
