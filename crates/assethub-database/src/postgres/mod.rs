//! PostgreSQL-backed [`AssetStore`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Postgres, Transaction};

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::types::{AssetId, PhotoId, QrCodeId, UserId};
use assethub_entity::asset::{Asset, AssetFilter, CreateAsset, UpdateAsset};
use assethub_entity::audit::{AuditAction, AuditEntry, AuditFilter, CreateAuditEntry};
use assethub_entity::catalog::{CatalogEntry, CatalogKind, CatalogRef};
use assethub_entity::photo::{AssetPhoto, CreateAssetPhoto};
use assethub_entity::qr::{CreateQrCode, QrCode};
use assethub_entity::user::{CreateUser, User};

use crate::connection::DatabasePool;
use crate::repositories::{
    AssetRepository, AuditRepository, CatalogRepository, PhotoRepository, QrCodeRepository,
    UserRepository,
};
use crate::store::{AssetStore, StoreTransaction};

/// Store backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgAssetStore {
    db: DatabasePool,
}

impl PgAssetStore {
    /// Create a store over an existing pool.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }

    /// The underlying pool.
    pub fn database(&self) -> &DatabasePool {
        &self.db
    }
}

#[async_trait]
impl AssetStore for PgAssetStore {
    fn backend(&self) -> &str {
        "postgres"
    }

    async fn begin(&self) -> AppResult<Box<dyn StoreTransaction>> {
        let tx = self.db.pool().begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;
        Ok(Box::new(PgStoreTransaction { tx }))
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.db.health_check().await
    }
}

/// A PostgreSQL transaction. Rolled back by sqlx when dropped uncommitted.
pub struct PgStoreTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl StoreTransaction for PgStoreTransaction {
    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }

    async fn insert_user(&mut self, data: &CreateUser) -> AppResult<User> {
        UserRepository::create(&mut self.tx, data).await
    }

    async fn find_user(&mut self, id: UserId) -> AppResult<Option<User>> {
        UserRepository::find_by_id(&mut self.tx, id).await
    }

    async fn find_user_by_username(&mut self, username: &str) -> AppResult<Option<User>> {
        UserRepository::find_by_username(&mut self.tx, username).await
    }

    async fn list_users(&mut self) -> AppResult<Vec<User>> {
        UserRepository::list(&mut self.tx).await
    }

    async fn insert_asset(&mut self, data: &CreateAsset) -> AppResult<Asset> {
        AssetRepository::create(&mut self.tx, data).await
    }

    async fn find_asset(&mut self, id: AssetId) -> AppResult<Option<Asset>> {
        AssetRepository::find_by_id(&mut self.tx, id).await
    }

    async fn asset_code_exists(&mut self, code: &str) -> AppResult<bool> {
        AssetRepository::code_exists(&mut self.tx, code).await
    }

    async fn count_assets_created_between(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<i64> {
        AssetRepository::count_created_between(&mut self.tx, start, end).await
    }

    async fn update_asset(&mut self, id: AssetId, data: &UpdateAsset) -> AppResult<Asset> {
        AssetRepository::update(&mut self.tx, id, data).await
    }

    async fn delete_asset(&mut self, id: AssetId) -> AppResult<()> {
        AssetRepository::delete(&mut self.tx, id).await
    }

    async fn list_assets(&mut self, filter: &AssetFilter) -> AppResult<Vec<Asset>> {
        AssetRepository::list(&mut self.tx, filter).await
    }

    async fn count_assets(&mut self) -> AppResult<i64> {
        AssetRepository::count(&mut self.tx).await
    }

    async fn insert_photo(&mut self, data: &CreateAssetPhoto) -> AppResult<AssetPhoto> {
        PhotoRepository::create(&mut self.tx, data).await
    }

    async fn find_photo(&mut self, id: PhotoId) -> AppResult<Option<AssetPhoto>> {
        PhotoRepository::find_by_id(&mut self.tx, id).await
    }

    async fn list_photos(&mut self, asset_id: AssetId) -> AppResult<Vec<AssetPhoto>> {
        PhotoRepository::find_by_asset(&mut self.tx, asset_id).await
    }

    async fn delete_photo(&mut self, id: PhotoId) -> AppResult<()> {
        PhotoRepository::delete(&mut self.tx, id).await
    }

    async fn insert_qr_code(&mut self, data: &CreateQrCode) -> AppResult<QrCode> {
        QrCodeRepository::create(&mut self.tx, data).await
    }

    async fn list_qr_codes(&mut self, asset_id: AssetId) -> AppResult<Vec<QrCode>> {
        QrCodeRepository::find_by_asset(&mut self.tx, asset_id).await
    }

    async fn delete_qr_code(&mut self, id: QrCodeId) -> AppResult<()> {
        QrCodeRepository::delete(&mut self.tx, id).await
    }

    async fn count_qr_codes(&mut self) -> AppResult<i64> {
        QrCodeRepository::count(&mut self.tx).await
    }

    async fn insert_catalog_entry(
        &mut self,
        kind: CatalogKind,
        name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<CatalogEntry> {
        CatalogRepository::create(&mut self.tx, kind, name, now).await
    }

    async fn find_catalog_entry(&mut self, entry: CatalogRef) -> AppResult<Option<CatalogEntry>> {
        CatalogRepository::find_by_id(&mut self.tx, entry).await
    }

    async fn find_catalog_entry_by_name(
        &mut self,
        kind: CatalogKind,
        name: &str,
    ) -> AppResult<Option<CatalogEntry>> {
        CatalogRepository::find_by_name(&mut self.tx, kind, name).await
    }

    async fn rename_catalog_entry(
        &mut self,
        entry: CatalogRef,
        name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<CatalogEntry> {
        CatalogRepository::rename(&mut self.tx, entry, name, now).await
    }

    async fn delete_catalog_entry(&mut self, entry: CatalogRef) -> AppResult<()> {
        CatalogRepository::delete(&mut self.tx, entry).await
    }

    async fn list_catalog_entries(&mut self, kind: CatalogKind) -> AppResult<Vec<CatalogEntry>> {
        CatalogRepository::list(&mut self.tx, kind).await
    }

    async fn count_assets_referencing(&mut self, entry: CatalogRef) -> AppResult<i64> {
        CatalogRepository::count_referencing_assets(&mut self.tx, entry).await
    }

    async fn count_catalog_entries(&mut self, kind: CatalogKind) -> AppResult<i64> {
        CatalogRepository::count(&mut self.tx, kind).await
    }

    async fn insert_audit_entry(&mut self, data: &CreateAuditEntry) -> AppResult<AuditEntry> {
        AuditRepository::create(&mut self.tx, data).await
    }

    async fn delete_audit_entries_for_asset(&mut self, asset_id: AssetId) -> AppResult<u64> {
        AuditRepository::delete_by_asset(&mut self.tx, asset_id).await
    }

    async fn search_audit_entries(&mut self, filter: &AuditFilter) -> AppResult<Vec<AuditEntry>> {
        AuditRepository::search(&mut self.tx, filter).await
    }

    async fn distinct_audit_actions(&mut self) -> AppResult<Vec<AuditAction>> {
        AuditRepository::distinct_actions(&mut self.tx).await
    }

    async fn count_audit_entries_between(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<i64> {
        AuditRepository::count_between(&mut self.tx, start, end).await
    }
}
