//! In-memory store and transaction.

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, OwnedMutexGuard};

use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::types::{AssetId, AuditEntryId, PhotoId, QrCodeId, UserId};
use assethub_entity::asset::{Asset, AssetFilter, CreateAsset, UpdateAsset};
use assethub_entity::audit::{AuditAction, AuditEntry, AuditFilter, CreateAuditEntry};
use assethub_entity::catalog::{CatalogEntry, CatalogKind, CatalogRef};
use assethub_entity::photo::{AssetPhoto, CreateAssetPhoto};
use assethub_entity::qr::{CreateQrCode, QrCode};
use assethub_entity::user::{CreateUser, User};

use super::tables::Tables;
use crate::store::{AssetStore, StoreTransaction};

/// Store keeping every table in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    state: Arc<Mutex<Tables>>,
}

impl MemoryAssetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    fn backend(&self) -> &str {
        "memory"
    }

    async fn begin(&self) -> AppResult<Box<dyn StoreTransaction>> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let working = guard.clone();
        Ok(Box::new(MemoryTransaction { guard, working }))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// A unit of work over a private copy of the tables.
pub struct MemoryTransaction {
    guard: OwnedMutexGuard<Tables>,
    working: Tables,
}

fn newest_first<T>(rows: &mut [T], key: impl Fn(&T) -> (DateTime<Utc>, i64)) {
    rows.sort_by_key(|row| Reverse(key(row)));
}

#[async_trait]
impl StoreTransaction for MemoryTransaction {
    async fn commit(self: Box<Self>) -> AppResult<()> {
        let MemoryTransaction { mut guard, working } = *self;
        *guard = working;
        Ok(())
    }

    async fn insert_user(&mut self, data: &CreateUser) -> AppResult<User> {
        let users = &mut self.working.users;
        if users.values().any(|u| u.username == data.username) {
            return Err(AppError::storage_conflict(format!(
                "Failed to create user: username '{}' already exists",
                data.username
            )));
        }
        let user = User {
            id: UserId(users.next_id()),
            username: data.username.clone(),
            full_name: data.full_name.clone(),
            role: data.role,
            created_at: data.created_at,
        };
        users.rows.insert(user.id.get(), user.clone());
        Ok(user)
    }

    async fn find_user(&mut self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.working.users.rows.get(&id.get()).cloned())
    }

    async fn find_user_by_username(&mut self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .working
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list_users(&mut self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.working.users.values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    async fn insert_asset(&mut self, data: &CreateAsset) -> AppResult<Asset> {
        let assets = &mut self.working.assets;
        if assets.values().any(|a| a.asset_code == data.asset_code) {
            return Err(AppError::storage_conflict(format!(
                "Failed to create asset: code '{}' already exists",
                data.asset_code
            )));
        }
        let asset = Asset {
            id: AssetId(assets.next_id()),
            asset_code: data.asset_code.clone(),
            name: data.name.clone(),
            category_id: Some(data.category_id),
            location_id: Some(data.location_id),
            condition: data.condition.clone(),
            description: data.description.clone(),
            created_at: data.created_at,
            updated_at: data.created_at,
        };
        assets.rows.insert(asset.id.get(), asset.clone());
        Ok(asset)
    }

    async fn find_asset(&mut self, id: AssetId) -> AppResult<Option<Asset>> {
        Ok(self.working.assets.rows.get(&id.get()).cloned())
    }

    async fn asset_code_exists(&mut self, code: &str) -> AppResult<bool> {
        Ok(self.working.assets.values().any(|a| a.asset_code == code))
    }

    async fn count_assets_created_between(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<i64> {
        Ok(self
            .working
            .assets
            .values()
            .filter(|a| a.created_at >= start && a.created_at < end)
            .count() as i64)
    }

    async fn update_asset(&mut self, id: AssetId, data: &UpdateAsset) -> AppResult<Asset> {
        let asset = self
            .working
            .assets
            .rows
            .get_mut(&id.get())
            .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))?;
        asset.name = data.name.clone();
        asset.category_id = Some(data.category_id);
        asset.location_id = Some(data.location_id);
        asset.condition = data.condition.clone();
        asset.description = data.description.clone();
        asset.updated_at = data.updated_at;
        Ok(asset.clone())
    }

    async fn delete_asset(&mut self, id: AssetId) -> AppResult<()> {
        self.working
            .assets
            .rows
            .remove(&id.get())
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))
    }

    async fn list_assets(&mut self, filter: &AssetFilter) -> AppResult<Vec<Asset>> {
        let mut assets: Vec<Asset> = self
            .working
            .assets
            .values()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect();
        newest_first(&mut assets, |a| (a.created_at, a.id.get()));
        Ok(assets)
    }

    async fn count_assets(&mut self) -> AppResult<i64> {
        Ok(self.working.assets.rows.len() as i64)
    }

    async fn insert_photo(&mut self, data: &CreateAssetPhoto) -> AppResult<AssetPhoto> {
        let photos = &mut self.working.photos;
        let photo = AssetPhoto {
            id: PhotoId(photos.next_id()),
            asset_id: data.asset_id,
            file_path: data.file_path.clone(),
            uploaded_at: data.uploaded_at,
        };
        photos.rows.insert(photo.id.get(), photo.clone());
        Ok(photo)
    }

    async fn find_photo(&mut self, id: PhotoId) -> AppResult<Option<AssetPhoto>> {
        Ok(self.working.photos.rows.get(&id.get()).cloned())
    }

    async fn list_photos(&mut self, asset_id: AssetId) -> AppResult<Vec<AssetPhoto>> {
        let mut photos: Vec<AssetPhoto> = self
            .working
            .photos
            .values()
            .filter(|p| p.asset_id == asset_id)
            .cloned()
            .collect();
        photos.sort_by_key(|p| (p.uploaded_at, p.id.get()));
        Ok(photos)
    }

    async fn delete_photo(&mut self, id: PhotoId) -> AppResult<()> {
        self.working.photos.rows.remove(&id.get());
        Ok(())
    }

    async fn insert_qr_code(&mut self, data: &CreateQrCode) -> AppResult<QrCode> {
        let qr_codes = &mut self.working.qr_codes;
        let qr = QrCode {
            id: QrCodeId(qr_codes.next_id()),
            asset_id: data.asset_id,
            file_path: data.file_path.clone(),
            qr_value: data.qr_value.clone(),
            generated_at: data.generated_at,
        };
        qr_codes.rows.insert(qr.id.get(), qr.clone());
        Ok(qr)
    }

    async fn list_qr_codes(&mut self, asset_id: AssetId) -> AppResult<Vec<QrCode>> {
        let mut codes: Vec<QrCode> = self
            .working
            .qr_codes
            .values()
            .filter(|q| q.asset_id == asset_id)
            .cloned()
            .collect();
        newest_first(&mut codes, |q| (q.generated_at, q.id.get()));
        Ok(codes)
    }

    async fn delete_qr_code(&mut self, id: QrCodeId) -> AppResult<()> {
        self.working.qr_codes.rows.remove(&id.get());
        Ok(())
    }

    async fn count_qr_codes(&mut self) -> AppResult<i64> {
        Ok(self.working.qr_codes.rows.len() as i64)
    }

    async fn insert_catalog_entry(
        &mut self,
        kind: CatalogKind,
        name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<CatalogEntry> {
        let table = self.working.catalog_mut(kind);
        if table.values().any(|e| e.name == name) {
            return Err(AppError::storage_conflict(format!(
                "Failed to create {kind}: name '{name}' already exists"
            )));
        }
        let entry = CatalogEntry {
            id: table.next_id(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn find_catalog_entry(&mut self, entry: CatalogRef) -> AppResult<Option<CatalogEntry>> {
        Ok(self
            .working
            .catalog(entry.kind())
            .rows
            .get(&entry.id())
            .cloned())
    }

    async fn find_catalog_entry_by_name(
        &mut self,
        kind: CatalogKind,
        name: &str,
    ) -> AppResult<Option<CatalogEntry>> {
        Ok(self
            .working
            .catalog(kind)
            .values()
            .find(|e| e.name == name)
            .cloned())
    }

    async fn rename_catalog_entry(
        &mut self,
        entry: CatalogRef,
        name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<CatalogEntry> {
        let kind = entry.kind();
        let table = self.working.catalog_mut(kind);
        if table.values().any(|e| e.name == name && e.id != entry.id()) {
            return Err(AppError::storage_conflict(format!(
                "Failed to rename {kind}: name '{name}' already exists"
            )));
        }
        let row = table
            .rows
            .get_mut(&entry.id())
            .ok_or_else(|| AppError::not_found(format!("{kind} {} not found", entry.id())))?;
        row.name = name.to_string();
        row.updated_at = now;
        Ok(row.clone())
    }

    async fn delete_catalog_entry(&mut self, entry: CatalogRef) -> AppResult<()> {
        self.working
            .catalog_mut(entry.kind())
            .rows
            .remove(&entry.id());
        Ok(())
    }

    async fn list_catalog_entries(&mut self, kind: CatalogKind) -> AppResult<Vec<CatalogEntry>> {
        let mut entries: Vec<CatalogEntry> = self.working.catalog(kind).values().cloned().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    async fn count_assets_referencing(&mut self, entry: CatalogRef) -> AppResult<i64> {
        let count = self
            .working
            .assets
            .values()
            .filter(|a| match entry {
                CatalogRef::Category(id) => a.category_id == Some(id),
                CatalogRef::Location(id) => a.location_id == Some(id),
            })
            .count();
        Ok(count as i64)
    }

    async fn count_catalog_entries(&mut self, kind: CatalogKind) -> AppResult<i64> {
        Ok(self.working.catalog(kind).rows.len() as i64)
    }

    async fn insert_audit_entry(&mut self, data: &CreateAuditEntry) -> AppResult<AuditEntry> {
        let log = &mut self.working.audit_log;
        let entry = AuditEntry {
            id: AuditEntryId(log.next_id()),
            asset_id: data.asset_id,
            actor_id: data.actor_id,
            action: data.action,
            description: data.description.clone(),
            created_at: data.created_at,
        };
        log.rows.insert(entry.id.get(), entry.clone());
        Ok(entry)
    }

    async fn delete_audit_entries_for_asset(&mut self, asset_id: AssetId) -> AppResult<u64> {
        let log = &mut self.working.audit_log;
        let before = log.rows.len();
        log.rows.retain(|_, e| e.asset_id != Some(asset_id));
        Ok((before - log.rows.len()) as u64)
    }

    async fn search_audit_entries(&mut self, filter: &AuditFilter) -> AppResult<Vec<AuditEntry>> {
        let mut entries: Vec<AuditEntry> = self
            .working
            .audit_log
            .values()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        newest_first(&mut entries, |e| (e.created_at, e.id.get()));
        if let Some(limit) = filter.limit {
            entries.truncate(limit.max(0) as usize);
        }
        Ok(entries)
    }

    async fn distinct_audit_actions(&mut self) -> AppResult<Vec<AuditAction>> {
        let mut actions: Vec<AuditAction> = self.working.audit_log.values().map(|e| e.action).collect();
        actions.sort_by_key(|a| a.as_str());
        actions.dedup();
        Ok(actions)
    }

    async fn count_audit_entries_between(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<i64> {
        Ok(self
            .working
            .audit_log
            .values()
            .filter(|e| e.created_at >= start && e.created_at < end)
            .count() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assethub_core::types::time::utc_day_bounds;
    use assethub_core::types::{CategoryId, LocationId};
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 2, hour, 0, 0).unwrap()
    }

    fn new_asset(code: &str, hour: u32) -> CreateAsset {
        CreateAsset {
            asset_code: code.to_string(),
            name: format!("Aset {code}"),
            category_id: CategoryId(1),
            location_id: LocationId(1),
            condition: "Baik".to_string(),
            description: String::new(),
            created_at: at(hour),
        }
    }

    #[tokio::test]
    async fn dropped_transaction_discards_writes() {
        let store = MemoryAssetStore::new();

        let mut tx = store.begin().await.unwrap();
        tx.insert_asset(&new_asset("AST-20250502-0001", 8)).await.unwrap();
        drop(tx);

        let mut tx = store.begin().await.unwrap();
        assert_eq!(tx.count_assets().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn committed_writes_are_visible_to_later_units() {
        let store = MemoryAssetStore::new();

        let mut tx = store.begin().await.unwrap();
        let asset = tx.insert_asset(&new_asset("AST-20250502-0001", 8)).await.unwrap();
        tx.commit().await.unwrap();

        let mut tx = store.begin().await.unwrap();
        assert_eq!(tx.find_asset(asset.id).await.unwrap(), Some(asset));
    }

    #[tokio::test]
    async fn duplicate_asset_code_is_a_storage_conflict() {
        let store = MemoryAssetStore::new();
        let mut tx = store.begin().await.unwrap();
        tx.insert_asset(&new_asset("AST-20250502-0001", 8)).await.unwrap();

        let err = tx
            .insert_asset(&new_asset("AST-20250502-0001", 9))
            .await
            .unwrap_err();
        assert!(err.is_storage_conflict());
    }

    #[tokio::test]
    async fn catalog_names_are_unique_per_kind_and_case_sensitive() {
        let store = MemoryAssetStore::new();
        let mut tx = store.begin().await.unwrap();

        tx.insert_catalog_entry(CatalogKind::Category, "Lab", at(8)).await.unwrap();
        tx.insert_catalog_entry(CatalogKind::Category, "lab", at(8)).await.unwrap();
        tx.insert_catalog_entry(CatalogKind::Location, "Lab", at(8)).await.unwrap();

        let err = tx
            .insert_catalog_entry(CatalogKind::Category, "Lab", at(9))
            .await
            .unwrap_err();
        assert!(err.is_storage_conflict());
    }

    #[tokio::test]
    async fn assets_are_listed_newest_first_and_counted_by_day() {
        let store = MemoryAssetStore::new();
        let mut tx = store.begin().await.unwrap();
        tx.insert_asset(&new_asset("AST-20250502-0001", 8)).await.unwrap();
        tx.insert_asset(&new_asset("AST-20250502-0002", 10)).await.unwrap();

        let listed = tx.list_assets(&AssetFilter::default()).await.unwrap();
        let codes: Vec<&str> = listed.iter().map(|a| a.asset_code.as_str()).collect();
        assert_eq!(codes, vec!["AST-20250502-0002", "AST-20250502-0001"]);

        let (start, end) = utc_day_bounds(at(0).date_naive());
        assert_eq!(tx.count_assets_created_between(start, end).await.unwrap(), 2);
        let (start, end) = utc_day_bounds(at(0).date_naive().succ_opt().unwrap());
        assert_eq!(tx.count_assets_created_between(start, end).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn audit_search_applies_filter_and_limit() {
        let store = MemoryAssetStore::new();
        let mut tx = store.begin().await.unwrap();
        for (hour, action) in [(8, AuditAction::Add), (9, AuditAction::Edit), (10, AuditAction::Add)] {
            tx.insert_audit_entry(&CreateAuditEntry {
                asset_id: Some(AssetId(1)),
                actor_id: UserId(1),
                action,
                description: format!("{action} at {hour}"),
                created_at: at(hour),
            })
            .await
            .unwrap();
        }

        let adds = tx
            .search_audit_entries(&AuditFilter {
                action: Some(AuditAction::Add),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(adds.len(), 2);
        assert_eq!(adds[0].description, "ADD at 10");

        let latest = tx
            .search_audit_entries(&AuditFilter {
                limit: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].action, AuditAction::Add);

        assert_eq!(
            tx.distinct_audit_actions().await.unwrap(),
            vec![AuditAction::Add, AuditAction::Edit]
        );
        assert_eq!(tx.delete_audit_entries_for_asset(AssetId(1)).await.unwrap(), 3);
    }
}
