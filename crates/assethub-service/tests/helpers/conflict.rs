//! A memory store whose asset inserts can be made to lose a uniqueness race.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::types::{AssetId, PhotoId, QrCodeId, UserId};
use assethub_database::memory::MemoryAssetStore;
use assethub_database::{AssetStore, StoreTransaction};
use assethub_entity::asset::{Asset, AssetFilter, CreateAsset, UpdateAsset};
use assethub_entity::audit::{AuditAction, AuditEntry, AuditFilter, CreateAuditEntry};
use assethub_entity::catalog::{CatalogEntry, CatalogKind, CatalogRef};
use assethub_entity::photo::{AssetPhoto, CreateAssetPhoto};
use assethub_entity::qr::{CreateQrCode, QrCode};
use assethub_entity::user::{CreateUser, User};

/// Memory store failing the next `n` asset inserts with `StorageConflict`
#[derive(Debug, Clone, Default)]
pub struct ConflictingStore {
    inner: MemoryAssetStore,
    pending: Arc<AtomicU32>,
}

impl ConflictingStore {
    /// Make the next `n` asset inserts fail
    pub fn fail_next_inserts(&self, n: u32) {
        self.pending.store(n, Ordering::SeqCst);
    }

    /// Conflicts armed but not yet raised
    pub fn pending(&self) -> u32 {
        self.pending.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetStore for ConflictingStore {
    fn backend(&self) -> &str {
        "memory"
    }

    async fn begin(&self) -> AppResult<Box<dyn StoreTransaction>> {
        Ok(Box::new(ConflictingTransaction {
            inner: self.inner.begin().await?,
            pending: Arc::clone(&self.pending),
        }))
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}

struct ConflictingTransaction {
    inner: Box<dyn StoreTransaction>,
    pending: Arc<AtomicU32>,
}

#[async_trait]
impl StoreTransaction for ConflictingTransaction {
    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.inner.commit().await
    }

    async fn insert_user(&mut self, data: &CreateUser) -> AppResult<User> {
        self.inner.insert_user(data).await
    }

    async fn find_user(&mut self, id: UserId) -> AppResult<Option<User>> {
        self.inner.find_user(id).await
    }

    async fn find_user_by_username(&mut self, username: &str) -> AppResult<Option<User>> {
        self.inner.find_user_by_username(username).await
    }

    async fn list_users(&mut self) -> AppResult<Vec<User>> {
        self.inner.list_users().await
    }

    async fn insert_asset(&mut self, data: &CreateAsset) -> AppResult<Asset> {
        let raced = self
            .pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if raced {
            return Err(AppError::storage_conflict(format!(
                "Failed to create asset: code '{}' already exists",
                data.asset_code
            )));
        }
        self.inner.insert_asset(data).await
    }

    async fn find_asset(&mut self, id: AssetId) -> AppResult<Option<Asset>> {
        self.inner.find_asset(id).await
    }

    async fn asset_code_exists(&mut self, code: &str) -> AppResult<bool> {
        self.inner.asset_code_exists(code).await
    }

    async fn count_assets_created_between(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<i64> {
        self.inner.count_assets_created_between(start, end).await
    }

    async fn update_asset(&mut self, id: AssetId, data: &UpdateAsset) -> AppResult<Asset> {
        self.inner.update_asset(id, data).await
    }

    async fn delete_asset(&mut self, id: AssetId) -> AppResult<()> {
        self.inner.delete_asset(id).await
    }

    async fn list_assets(&mut self, filter: &AssetFilter) -> AppResult<Vec<Asset>> {
        self.inner.list_assets(filter).await
    }

    async fn count_assets(&mut self) -> AppResult<i64> {
        self.inner.count_assets().await
    }

    async fn insert_photo(&mut self, data: &CreateAssetPhoto) -> AppResult<AssetPhoto> {
        self.inner.insert_photo(data).await
    }

    async fn find_photo(&mut self, id: PhotoId) -> AppResult<Option<AssetPhoto>> {
        self.inner.find_photo(id).await
    }

    async fn list_photos(&mut self, asset_id: AssetId) -> AppResult<Vec<AssetPhoto>> {
        self.inner.list_photos(asset_id).await
    }

    async fn delete_photo(&mut self, id: PhotoId) -> AppResult<()> {
        self.inner.delete_photo(id).await
    }

    async fn insert_qr_code(&mut self, data: &CreateQrCode) -> AppResult<QrCode> {
        self.inner.insert_qr_code(data).await
    }

    async fn list_qr_codes(&mut self, asset_id: AssetId) -> AppResult<Vec<QrCode>> {
        self.inner.list_qr_codes(asset_id).await
    }

    async fn delete_qr_code(&mut self, id: QrCodeId) -> AppResult<()> {
        self.inner.delete_qr_code(id).await
    }

    async fn count_qr_codes(&mut self) -> AppResult<i64> {
        self.inner.count_qr_codes().await
    }

    async fn insert_catalog_entry(
        &mut self,
        kind: CatalogKind,
        name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<CatalogEntry> {
        self.inner.insert_catalog_entry(kind, name, now).await
    }

    async fn find_catalog_entry(&mut self, entry: CatalogRef) -> AppResult<Option<CatalogEntry>> {
        self.inner.find_catalog_entry(entry).await
    }

    async fn find_catalog_entry_by_name(
        &mut self,
        kind: CatalogKind,
        name: &str,
    ) -> AppResult<Option<CatalogEntry>> {
        self.inner.find_catalog_entry_by_name(kind, name).await
    }

    async fn rename_catalog_entry(
        &mut self,
        entry: CatalogRef,
        name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<CatalogEntry> {
        self.inner.rename_catalog_entry(entry, name, now).await
    }

    async fn delete_catalog_entry(&mut self, entry: CatalogRef) -> AppResult<()> {
        self.inner.delete_catalog_entry(entry).await
    }

    async fn list_catalog_entries(&mut self, kind: CatalogKind) -> AppResult<Vec<CatalogEntry>> {
        self.inner.list_catalog_entries(kind).await
    }

    async fn count_assets_referencing(&mut self, entry: CatalogRef) -> AppResult<i64> {
        self.inner.count_assets_referencing(entry).await
    }

    async fn count_catalog_entries(&mut self, kind: CatalogKind) -> AppResult<i64> {
        self.inner.count_catalog_entries(kind).await
    }

    async fn insert_audit_entry(&mut self, data: &CreateAuditEntry) -> AppResult<AuditEntry> {
        self.inner.insert_audit_entry(data).await
    }

    async fn delete_audit_entries_for_asset(&mut self, asset_id: AssetId) -> AppResult<u64> {
        self.inner.delete_audit_entries_for_asset(asset_id).await
    }

    async fn search_audit_entries(&mut self, filter: &AuditFilter) -> AppResult<Vec<AuditEntry>> {
        self.inner.search_audit_entries(filter).await
    }

    async fn distinct_audit_actions(&mut self) -> AppResult<Vec<AuditAction>> {
        self.inner.distinct_audit_actions().await
    }

    async fn count_audit_entries_between(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<i64> {
        self.inner.count_audit_entries_between(start, end).await
    }
}
